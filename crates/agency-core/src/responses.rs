//! CLI response types returned as JSON by `agy` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `agy gate check`, `agy gate recalc`, `agy module advance`, and
//! `agy workflow status`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advance::BlockingReason;
use crate::audit_detail::{AdvancedDetail, StatusChangedDetail};
use crate::entities::Step;
use crate::enums::{GateStatus, ModuleStatus, StepStatus, TransitionKind};
use crate::gate::GateValidation;
use crate::policy::RecomputeOutcome;

/// Response from `agy gate check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateCheckResponse {
    pub module_id: String,
    pub gate_id: Option<String>,
    pub conditions: Vec<String>,
    pub stored_status: Option<GateStatus>,
    pub stored_source: Option<TransitionKind>,
    pub validation: GateValidation,
    pub advanceable: bool,
    pub blocking_reason: Option<BlockingReason>,
    /// The module's steps in board order.
    pub steps: Vec<StepSummary>,
}

/// One step row in `agy gate check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StepSummary {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    pub satisfied: bool,
    pub checklist_done: usize,
    pub checklist_total: usize,
}

impl From<&Step> for StepSummary {
    fn from(step: &Step) -> Self {
        let total = step.checklist.len();
        Self {
            id: step.id.clone(),
            name: step.name.clone(),
            status: step.status,
            satisfied: step.is_satisfied(),
            checklist_done: total - step.incomplete_items(),
            checklist_total: total,
        }
    }
}

/// Response from `agy gate recalc`, `agy step status`, and
/// `agy checklist toggle`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateRecalcResponse {
    pub module_id: String,
    pub gate_id: Option<String>,
    pub outcome: Option<RecomputeOutcome>,
    pub status: Option<GateStatus>,
    pub issues: Vec<String>,
}

/// Response from `agy gate set`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateOverrideResponse {
    pub module_id: String,
    pub gate_id: String,
    pub status: GateStatus,
    pub change: Option<StatusChangedDetail>,
}

/// Response from `agy module advance`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModuleAdvanceResponse {
    pub workflow_id: String,
    pub advanced: AdvancedDetail,
}

/// One row of `agy workflow status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModuleSummary {
    pub id: String,
    pub name: String,
    pub position: u32,
    pub status: ModuleStatus,
    pub gate_status: Option<GateStatus>,
    pub steps_satisfied: usize,
    pub steps_total: usize,
    pub advanceable: bool,
    pub blocking_reason: Option<String>,
    pub current: bool,
}

/// Response from `agy workflow status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowStatusResponse {
    pub workflow_id: String,
    pub name: String,
    pub client_id: Option<String>,
    pub current_module: Option<String>,
    pub completed: bool,
    pub modules: Vec<ModuleSummary>,
}
