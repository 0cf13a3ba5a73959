use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Gate, Step};
use crate::enums::ModuleStatus;

/// A named onboarding phase (e.g. "Setup Tracking") with zero or one gate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub name: String,
    /// Position within the workflow, lowest first.
    pub position: u32,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub gate: Option<Gate>,
}

impl Module {
    /// Lifecycle status derived from the steps.
    ///
    /// An empty module reads as not started here even though it gates as
    /// vacuously satisfied.
    #[must_use]
    pub fn derived_status(&self) -> ModuleStatus {
        if self.steps.iter().any(|step| step.status.is_blocked()) {
            return ModuleStatus::Blocked;
        }
        if self.steps.iter().all(|step| step.status.is_unstarted()) {
            return ModuleStatus::NotStarted;
        }
        if self.steps.iter().all(Step::is_satisfied) {
            return ModuleStatus::Done;
        }
        ModuleStatus::InProgress
    }

    /// Gates attached to this module, as a slice for the advancement policy.
    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        self.gate.as_slice()
    }

    /// Steps in board order: `order_index` first, unindexed steps last, list
    /// order breaking ties.
    #[must_use]
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.order_index.unwrap_or(u32::MAX));
        steps
    }

    #[must_use]
    pub fn satisfied_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.is_satisfied()).count()
    }
}
