//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of gate issues shown per gate.
const fn default_issue_limit() -> u32 {
    5
}

fn default_format() -> String {
    "json".to_string()
}

fn default_snapshot_path() -> String {
    ".agency/workflow.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How many gate issues to show before truncating.
    #[serde(default = "default_issue_limit")]
    pub issue_limit: u32,

    /// Output format when `--format` is not given: json, table, or raw.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Workflow snapshot location, relative to the project root.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            issue_limit: default_issue_limit(),
            default_format: default_format(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl GeneralConfig {
    /// Reject values the CLI cannot act on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero issue limit, an unknown
    /// format, or an empty snapshot path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.issue_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.issue_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !matches!(self.default_format.as_str(), "json" | "table" | "raw") {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!("expected json, table, or raw, got '{}'", self.default_format),
            });
        }
        if self.snapshot_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.snapshot_path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.issue_limit, 5);
        assert_eq!(config.default_format, "json");
        assert_eq!(config.snapshot_path, ".agency/workflow.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_issue_limit_is_invalid() {
        let config = GeneralConfig {
            issue_limit: 0,
            ..GeneralConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.issue_limit"));
    }

    #[test]
    fn unknown_format_is_invalid() {
        let config = GeneralConfig {
            default_format: "xml".into(),
            ..GeneralConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
