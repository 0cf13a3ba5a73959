use std::path::{Path, PathBuf};

use agency_config::AgencyConfig;
use agency_core::entities::Workflow;
use agency_core::policy::RecomputePolicy;

use crate::cli::GlobalFlags;
use crate::context::{AGENCY_DIR, TrailWriter, load_workflow, save_workflow};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AgencyConfig,
    pub snapshot_path: PathBuf,
    pub trail: TrailWriter,
}

impl AppContext {
    /// Resolve the snapshot and trail locations for `project_root`.
    ///
    /// `--snapshot` wins over `general.snapshot_path`; relative paths are
    /// resolved against the project root.
    #[must_use]
    pub fn init(project_root: &Path, config: AgencyConfig, flags: &GlobalFlags) -> Self {
        let snapshot = flags
            .snapshot
            .as_deref()
            .unwrap_or(&config.general.snapshot_path);
        let snapshot_path = project_root.join(snapshot);
        let trail = TrailWriter::new(project_root.join(AGENCY_DIR).join("trail"));

        tracing::debug!(
            root = %project_root.display(),
            snapshot = %snapshot_path.display(),
            trail = %trail.trail_dir().display(),
            "application context ready"
        );

        Self {
            config,
            snapshot_path,
            trail,
        }
    }

    /// Policy for automatic recomputes and advancement checks.
    #[must_use]
    pub const fn policy(&self) -> RecomputePolicy {
        if self.config.gates.preserve_manual_status {
            RecomputePolicy::preserving()
        } else {
            RecomputePolicy::fresh()
        }
    }

    /// How many issues to show per gate.
    #[must_use]
    pub fn issue_limit(&self, flags: &GlobalFlags) -> usize {
        let limit = flags.limit.unwrap_or(self.config.general.issue_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    pub async fn load_workflow(&self) -> anyhow::Result<Workflow> {
        load_workflow(&self.snapshot_path).await
    }

    pub async fn save_workflow(&self, workflow: &Workflow) -> anyhow::Result<()> {
        save_workflow(&self.snapshot_path, workflow).await
    }
}
