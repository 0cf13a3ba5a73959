//! Workflow snapshot file I/O.
//!
//! The snapshot is the data store the gate commands read and write back. It
//! holds one `Workflow` as JSON or TOML, picked by file extension.

use std::path::Path;

use agency_core::entities::Workflow;
use anyhow::{Context, bail};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// Format implied by `path`'s extension. Anything but `.toml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Read and integrity-check the workflow stored at `path`.
pub async fn load_workflow(path: &Path) -> anyhow::Result<Workflow> {
    if !path.exists() {
        bail!("workflow snapshot '{}' does not exist", path.display());
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read workflow snapshot '{}'", path.display()))?;

    let workflow: Workflow = match SnapshotFormat::from_path(path) {
        SnapshotFormat::Json => serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse '{}' as JSON", path.display()))?,
        SnapshotFormat::Toml => toml::from_str(&raw)
            .with_context(|| format!("failed to parse '{}' as TOML", path.display()))?,
    };

    workflow
        .check_integrity()
        .with_context(|| format!("workflow snapshot '{}' is inconsistent", path.display()))?;
    tracing::debug!(path = %path.display(), workflow = %workflow.id, "snapshot loaded");
    Ok(workflow)
}

/// Write `workflow` back to `path` in the format its extension implies.
pub async fn save_workflow(path: &Path, workflow: &Workflow) -> anyhow::Result<()> {
    let rendered = match SnapshotFormat::from_path(path) {
        SnapshotFormat::Json => {
            let mut json = serde_json::to_string_pretty(workflow)?;
            json.push('\n');
            json
        }
        SnapshotFormat::Toml => toml::to_string_pretty(workflow)
            .context("failed to serialize workflow snapshot as TOML")?,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }

    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("failed to write workflow snapshot '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), workflow = %workflow.id, "snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use agency_core::entities::{ChecklistItem, Gate, Module, Step, Workflow};
    use agency_core::enums::{GateStatus, StepStatus};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{SnapshotFormat, load_workflow, save_workflow};

    fn workflow() -> Workflow {
        Workflow {
            id: "wf-acme".into(),
            client_id: Some("cli-acme".into()),
            name: "Acme onboarding".into(),
            modules: vec![Module {
                id: "mod-tracking".into(),
                name: "Tracking".into(),
                position: 1,
                steps: vec![Step {
                    id: "stp-pixel".into(),
                    name: "Install pixel".into(),
                    status: StepStatus::Done,
                    assignee_id: None,
                    order_index: Some(1),
                    checklist: vec![ChecklistItem {
                        id: "chk-purchase".into(),
                        name: "Purchase event fires".into(),
                        is_completed: false,
                        completed_by: None,
                        completed_at: None,
                    }],
                }],
                gate: Some(Gate {
                    id: "gat-tracking".into(),
                    name: "Tracking verified".into(),
                    conditions: vec!["Pixel fires on purchase".into()],
                    status: Some(GateStatus::Pending),
                    status_source: None,
                    updated_at: None,
                }),
            }],
            current_module: Some("mod-tracking".into()),
            completed: false,
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(SnapshotFormat::from_path(Path::new("a/workflow.json")), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path(Path::new("a/workflow.TOML")), SnapshotFormat::Toml);
        assert_eq!(SnapshotFormat::from_path(Path::new("workflow")), SnapshotFormat::Json);
    }

    #[tokio::test]
    async fn json_snapshot_survives_save_and_load() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join(".agency/workflow.json");

        save_workflow(&path, &workflow()).await.expect("save should work");
        let loaded = load_workflow(&path).await.expect("load should work");
        assert_eq!(loaded, workflow());
    }

    #[tokio::test]
    async fn toml_snapshot_survives_save_and_load() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("workflow.toml");

        save_workflow(&path, &workflow()).await.expect("save should work");
        let loaded = load_workflow(&path).await.expect("load should work");
        assert_eq!(loaded, workflow());
    }

    #[tokio::test]
    async fn missing_snapshot_is_an_error() {
        let temp = TempDir::new().expect("tempdir should create");
        let err = load_workflow(&temp.path().join("nope.json"))
            .await
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected_on_load() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("workflow.json");
        let mut broken = workflow();
        let copy = broken.modules[0].clone();
        broken.modules.push(copy);
        save_workflow(&path, &broken).await.expect("save should work");

        let err = load_workflow(&path).await.expect_err("duplicates should fail");
        assert!(format!("{err:#}").contains("duplicate"));
    }
}
