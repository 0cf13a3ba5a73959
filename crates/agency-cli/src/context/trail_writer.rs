//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to per-workflow
//! `.agency/trail/{workflow_id}.jsonl` files, one line per write.

use std::path::{Path, PathBuf};

use agency_core::enums::{EntityType, TrailOp};
use agency_core::trail::TrailOperation;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Appends trail operations to per-workflow JSONL files.
pub struct TrailWriter {
    trail_dir: PathBuf,
}

impl TrailWriter {
    /// Create a writer for `trail_dir`. The directory is created on first append.
    #[must_use]
    pub const fn new(trail_dir: PathBuf) -> Self {
        Self { trail_dir }
    }

    /// Append one operation to `{trail_dir}/{op.workflow}.jsonl`.
    pub fn append(&self, op: &TrailOperation) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.trail_dir).with_context(|| {
            format!("failed to create trail directory '{}'", self.trail_dir.display())
        })?;

        let path = self.path_for(&op.workflow);
        serde_jsonlines::append_json_lines(&path, [op])
            .with_context(|| format!("failed to append to trail '{}'", path.display()))?;
        tracing::debug!(op = %op.op, entity = %op.entity, id = %op.id, "trail appended");
        Ok(())
    }

    /// Build an operation from a typed detail payload and append it.
    pub fn record<T: Serialize>(
        &self,
        workflow: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        detail: &T,
        at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let op = TrailOperation::new(workflow, op, entity, id, detail, at)
            .context("failed to serialize trail payload")?;
        self.append(&op)
    }

    #[must_use]
    pub fn path_for(&self, workflow_id: &str) -> PathBuf {
        self.trail_dir.join(format!("{workflow_id}.jsonl"))
    }

    /// The directory where trail files are stored.
    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}
