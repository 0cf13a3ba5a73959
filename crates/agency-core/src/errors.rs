//! Error types for workflow lookups and progression.
//!
//! Gate validation itself never fails; these errors come from resolving ids
//! against a workflow snapshot and from trying to advance past a gate.
//! A unified error is left to `agency-cli`, where all crate errors converge.

use thiserror::Error;

use crate::enums::EntityType;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: EntityType,
        id: String,
        from: String,
        to: String,
    },

    /// The current module's gates do not allow moving on.
    #[error("Module {module} cannot advance: {reason}")]
    AdvanceBlocked { module: String, reason: String },

    /// Snapshot data failed validation (duplicate ids, empty workflow, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: EntityType, id: &str) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}
