//! Module advancement policy.
//!
//! A module may move on when it has no gates or every gate's validation is
//! `passed`. When it may not, [`blocking_reason`] picks the one message to
//! show: an explicitly failed or blocked gate first, then the first issue of a
//! pending gate.
//!
//! Gates and validations are paired by index.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Gate;
use crate::enums::GateStatus;
use crate::gate::GateValidation;

/// Why a module cannot advance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BlockingReason {
    pub gate_id: String,
    pub gate_name: String,
    pub status: GateStatus,
    pub message: String,
}

/// Whether the module owning `gates` may advance to the next module.
///
/// `status` is authoritative: a passed validation that still lists issues does
/// not hold the module back. A gate with no paired validation does.
#[must_use]
pub fn can_advance_module(gates: &[Gate], validations: &[GateValidation]) -> bool {
    (0..gates.len()).all(|index| validations.get(index).is_some_and(GateValidation::is_passed))
}

/// The message to show for a module that cannot advance. `None` when it can.
#[must_use]
pub fn blocking_reason(gates: &[Gate], validations: &[GateValidation]) -> Option<BlockingReason> {
    if can_advance_module(gates, validations) {
        return None;
    }

    let paired = || {
        gates
            .iter()
            .enumerate()
            .map(|(index, gate)| (gate, validations.get(index)))
    };

    for (gate, validation) in paired() {
        if let Some(validation) = validation
            && matches!(validation.status, GateStatus::Failed | GateStatus::Blocked)
        {
            let message = validation
                .issues
                .first()
                .cloned()
                .unwrap_or_else(|| format!("Gate \"{}\" is {}", gate.name, validation.status));
            return Some(reason(gate, validation.status, message));
        }
    }

    for (gate, validation) in paired() {
        if let Some(validation) = validation
            && validation.status == GateStatus::Pending
            && let Some(issue) = validation.issues.iter().find(|issue| !issue.trim().is_empty())
        {
            return Some(reason(gate, GateStatus::Pending, issue.clone()));
        }
    }

    paired().find_map(|(gate, validation)| match validation {
        None => Some(reason(
            gate,
            GateStatus::Pending,
            format!("Gate \"{}\" has not been validated", gate.name),
        )),
        Some(validation) if !validation.is_passed() => Some(reason(
            gate,
            validation.status,
            format!("Gate \"{}\" is {}", gate.name, validation.status),
        )),
        Some(_) => None,
    })
}

fn reason(gate: &Gate, status: GateStatus, message: String) -> BlockingReason {
    BlockingReason {
        gate_id: gate.id.clone(),
        gate_name: gate.name.clone(),
        status,
        message,
    }
}
