//! Gate validation engine.
//!
//! Decides whether a module's gate is passed, pending, or blocked from the
//! state of the module's steps and their checklists. Everything here is a pure
//! function of its inputs: no I/O, no stored state, same answer every call.
//!
//! Rules, applied per step in list order:
//! - `blocked` step: issue, and the whole gate is `blocked`
//! - step not `done`: issue, gate at best `pending`
//! - `done` step with unticked checklist items: issue, gate at best `pending`
//!
//! With no issues (including no steps at all) the gate is `passed`. The engine
//! never produces `failed`; that status only arrives through a manual override.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Step;
use crate::enums::{GateStatus, StepStatus};

/// Fresh result of validating a gate against its module's steps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateValidation {
    pub status: GateStatus,
    /// Why the gate is not passed, in step order. Empty when passed.
    pub issues: Vec<String>,
}

impl GateValidation {
    #[must_use]
    pub fn passed() -> Self {
        Self {
            status: GateStatus::Passed,
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == GateStatus::Passed
    }

    /// At most `limit` issues, for display.
    #[must_use]
    pub fn issues_truncated(&self, limit: usize) -> &[String] {
        &self.issues[..self.issues.len().min(limit)]
    }
}

/// Validate a gate from the steps of its module.
///
/// `current` is the gate's stored status. It is logged for diagnostics and
/// never changes the result; keeping manual statuses in place is the caller's
/// policy (see [`crate::policy`]).
#[must_use]
pub fn validate_gate(steps: &[Step], current: Option<GateStatus>) -> GateValidation {
    let mut issues = Vec::new();
    let mut blocked = false;

    for step in steps {
        match step_issue(step) {
            Some(issue) => {
                blocked |= step.status.is_blocked();
                issues.push(issue);
            }
            None => debug_assert!(step.is_satisfied()),
        }
    }

    let status = if blocked {
        GateStatus::Blocked
    } else if issues.is_empty() {
        GateStatus::Passed
    } else {
        GateStatus::Pending
    };

    tracing::trace!(
        stored = %current.unwrap_or_default(),
        fresh = %status,
        steps = steps.len(),
        issues = issues.len(),
        "gate validated"
    );

    GateValidation { status, issues }
}

/// The single issue a step contributes, if any.
fn step_issue(step: &Step) -> Option<String> {
    match step.status {
        StepStatus::Blocked => Some(format!("Step \"{}\" is blocked", step.name)),
        StepStatus::Done => match step.incomplete_items() {
            0 => None,
            open => Some(format!(
                "Step \"{}\" has {open} incomplete checklist item(s)",
                step.name
            )),
        },
        status @ (StepStatus::Backlog
        | StepStatus::Todo
        | StepStatus::Doing
        | StepStatus::Review) => Some(format!(
            "Step \"{}\" is not done (status: {status})",
            step.name
        )),
    }
}
