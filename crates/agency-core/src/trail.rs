//! JSONL trail operation envelope.
//!
//! Every write the workflow commands make (gate status, step moves, checklist
//! toggles, advancement) is recorded as a `TrailOperation` in a per-workflow
//! `.agency/trail/{workflow_id}.jsonl` file. The data store stays the source of
//! truth; the trail is the audit record of who changed what and why.
//!
//! The `v` field supports schema versioning: records without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, TrailOp};

/// Default trail version for records written before versioning.
const fn default_trail_version() -> u32 {
    1
}

/// A single operation recorded in the JSONL trail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 for records without this field.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// ISO 8601 timestamp of the operation.
    pub ts: String,

    /// Workflow the operation belongs to.
    pub workflow: String,

    /// What kind of write this represents.
    pub op: TrailOp,

    /// Which entity type was affected.
    pub entity: EntityType,

    /// ID of the affected entity.
    pub id: String,

    /// Operation payload. Schema depends on `op` (see [`crate::audit_detail`]).
    pub data: serde_json::Value,
}

impl TrailOperation {
    /// Build a current-version operation with a typed detail payload.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if `detail` cannot be serialized.
    pub fn new<T: Serialize>(
        workflow: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        detail: &T,
        at: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            v: default_trail_version(),
            ts: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            workflow: workflow.to_string(),
            op,
            entity,
            id: id.to_string(),
            data: serde_json::to_value(detail)?,
        })
    }
}
