//! # agency-config
//!
//! Layered configuration loading for the agency onboarding tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGENCY_*` prefix, `__` as separator)
//! 2. Project-level `.agency/config.toml`
//! 3. User-level `~/.config/agency/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGENCY_GENERAL__ISSUE_LIMIT` -> `general.issue_limit`,
//! `AGENCY_GATES__PRESERVE_MANUAL_STATUS` -> `gates.preserve_manual_status`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use agency_config::AgencyConfig;
//!
//! let config = AgencyConfig::load_with_dotenv(std::path::Path::new(".")).expect("config");
//! println!("showing up to {} issues per gate", config.general.issue_limit);
//! ```

mod error;
mod gates;
mod general;

pub use error::ConfigError;
pub use gates::GatesConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".agency/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgencyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gates: GatesConfig,
}

impl AgencyConfig {
    /// Load configuration for `project_root` after reading its `.env` file.
    ///
    /// Variables from `.env` never override ones already set in the process.
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_path(project_root.join(".env"));
        Self::load_for_project(project_root)
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AGENCY_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agency").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AgencyConfig::default();
        assert_eq!(config.general.issue_limit, 5);
        assert!(config.gates.preserve_manual_status);
    }

    #[test]
    fn figment_builds_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config: AgencyConfig = AgencyConfig::figment(dir.path())
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.general.default_format, "json");
        assert_eq!(config.general.snapshot_path, ".agency/workflow.json");
    }
}
