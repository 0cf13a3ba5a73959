//! When a fresh validation may overwrite a gate's stored status.
//!
//! The engine in [`crate::gate`] always computes fresh. This module holds the
//! rule layered on top: a `failed` or `blocked` status a person set stays put
//! through automatic recomputes (checklist toggles, step moves) and is only
//! replaced when someone explicitly asks for a recalculation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Gate, Step};
use crate::enums::{GateStatus, RecomputeTrigger};
use crate::gate::{GateValidation, validate_gate};

/// What a recompute means for the stored gate status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecomputeOutcome {
    /// The stored status should change.
    Updated { from: GateStatus, to: GateStatus },
    /// Fresh status equals the stored one.
    Unchanged,
    /// A manual status was kept in place of the fresh one.
    Preserved { manual: GateStatus },
}

/// Result of recomputing one gate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateRecompute {
    pub trigger: RecomputeTrigger,
    pub validation: GateValidation,
    pub outcome: RecomputeOutcome,
}

/// Whether manual `failed`/`blocked` statuses survive automatic recomputes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecomputePolicy {
    pub preserve_manual: bool,
}

impl Default for RecomputePolicy {
    fn default() -> Self {
        Self::preserving()
    }
}

impl RecomputePolicy {
    #[must_use]
    pub const fn preserving() -> Self {
        Self {
            preserve_manual: true,
        }
    }

    /// Every recompute writes the fresh result.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            preserve_manual: false,
        }
    }

    const fn holds(self, gate_is_manual_hold: bool, trigger: RecomputeTrigger) -> bool {
        self.preserve_manual
            && gate_is_manual_hold
            && matches!(trigger, RecomputeTrigger::Automatic)
    }

    /// Recompute `gate` from `steps` and decide whether to overwrite.
    ///
    /// Does not mutate the gate; pass the result to [`Gate::apply_recompute`].
    #[must_use]
    pub fn recompute(
        self,
        gate: &Gate,
        steps: &[Step],
        trigger: RecomputeTrigger,
    ) -> GateRecompute {
        let stored = gate.current_status();
        let validation = validate_gate(steps, gate.status);

        let outcome = if self.holds(gate.is_manual_hold(), trigger) {
            RecomputeOutcome::Preserved { manual: stored }
        } else if validation.status == stored && gate.status.is_some() {
            RecomputeOutcome::Unchanged
        } else {
            RecomputeOutcome::Updated {
                from: stored,
                to: validation.status,
            }
        };

        GateRecompute {
            trigger,
            validation,
            outcome,
        }
    }

    /// The validation the advancement policy should judge `gate` by.
    ///
    /// A held `failed`/`blocked` status stands in for the fresh result so a
    /// module cannot slip past a gate someone rejected.
    #[must_use]
    pub fn effective_validation(self, gate: &Gate, steps: &[Step]) -> GateValidation {
        let fresh = validate_gate(steps, gate.status);
        if !self.preserve_manual || !gate.is_manual_hold() {
            return fresh;
        }

        let stored = gate.current_status();
        if fresh.status == stored {
            return fresh;
        }

        GateValidation {
            status: stored,
            issues: vec![format!("Gate \"{}\" was manually marked {stored}", gate.name)],
        }
    }
}
