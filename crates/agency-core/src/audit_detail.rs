//! Typed trail detail payloads.
//!
//! Each trail operation carries a structured `data` JSON blob. These types
//! give that blob a schema for the writes the workflow produces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GateStatus, StepStatus};

/// Detail for `TrailOp::Recompute` and `TrailOp::Override`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: GateStatus,
    pub to: GateStatus,
    pub reason: Option<String>,
}

/// Detail for `TrailOp::StepStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StepMovedDetail {
    pub module_id: String,
    pub from: StepStatus,
    pub to: StepStatus,
}

/// Detail for `TrailOp::Toggle`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ToggledDetail {
    pub module_id: String,
    pub step_id: String,
    pub is_completed: bool,
    pub completed_by: Option<String>,
}

/// Detail for `TrailOp::Advance`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdvancedDetail {
    pub from_module: String,
    pub to_module: Option<String>,
    pub completed: bool,
}
