use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ChecklistItem;
use crate::enums::StepStatus;

/// A unit of work inside a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub order_index: Option<u32>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Step {
    /// Number of checklist items not yet ticked.
    #[must_use]
    pub fn incomplete_items(&self) -> usize {
        self.checklist.iter().filter(|item| !item.is_completed).count()
    }

    /// Done on the board and every checklist item ticked.
    ///
    /// The raw `status` alone is not trusted: stored data may hold a `done`
    /// step with open checklist items.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.status.is_done() && self.incomplete_items() == 0
    }
}
