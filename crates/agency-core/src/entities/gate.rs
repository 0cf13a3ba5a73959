use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_detail::StatusChangedDetail;
use crate::enums::{EntityType, GateOverride, GateStatus, TransitionKind};
use crate::errors::CoreError;
use crate::policy::{GateRecompute, RecomputeOutcome};

/// A checkpoint attached to a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Gate {
    pub id: String,
    pub name: String,
    /// Human-readable condition labels. Shown to users, never evaluated.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Last computed or overridden status. `None` reads as pending.
    #[serde(default)]
    pub status: Option<GateStatus>,
    /// Whether `status` was last written by a person or by a recompute.
    #[serde(default)]
    pub status_source: Option<TransitionKind>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gate {
    #[must_use]
    pub fn current_status(&self) -> GateStatus {
        self.status.unwrap_or_default()
    }

    /// Stored `failed`/`blocked` that automatic recomputes must leave alone.
    ///
    /// Records without a source are treated as manual.
    #[must_use]
    pub fn is_manual_hold(&self) -> bool {
        self.current_status().is_manual_hold()
            && self.status_source != Some(TransitionKind::Automatic)
    }

    /// Record a manual override.
    ///
    /// Re-applying the status the gate already holds still claims it as a
    /// manual decision when the stored status came from a recompute, so an
    /// automatic `blocked` confirmed by a person becomes a hold. Returns
    /// `None` only when the gate already holds the target as a manual status.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the manual edge is not allowed.
    pub fn apply_override(
        &mut self,
        action: GateOverride,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<StatusChangedDetail>, CoreError> {
        let from = self.current_status();
        let to = action.target();

        if from == to {
            if self.status == Some(to) && self.status_source == Some(TransitionKind::Manual) {
                return Ok(None);
            }
            self.write_status(to, TransitionKind::Manual, now);
            tracing::debug!(gate = %self.id, status = %to, "gate status confirmed");
        } else {
            self.check_edge(from, to, TransitionKind::Manual)?;
            self.write_status(to, TransitionKind::Manual, now);
            tracing::debug!(gate = %self.id, %from, %to, "gate overridden");
        }

        Ok(Some(StatusChangedDetail {
            from,
            to,
            reason: reason.or_else(|| Some(action.to_string())),
        }))
    }

    /// Persist the outcome of a recompute. Only `Updated` outcomes write.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` for an edge recomputes may not
    /// take, such as any move into `failed`.
    pub fn apply_recompute(
        &mut self,
        recompute: &GateRecompute,
        now: DateTime<Utc>,
    ) -> Result<Option<StatusChangedDetail>, CoreError> {
        let RecomputeOutcome::Updated { from, to } = recompute.outcome else {
            return Ok(None);
        };
        if from != to {
            self.check_edge(from, to, TransitionKind::Automatic)?;
        }

        self.write_status(to, TransitionKind::Automatic, now);
        tracing::debug!(
            gate = %self.id,
            %from,
            %to,
            trigger = %recompute.trigger,
            "gate recomputed"
        );
        Ok(Some(StatusChangedDetail {
            from,
            to,
            reason: recompute.validation.issues.first().cloned(),
        }))
    }

    fn check_edge(
        &self,
        from: GateStatus,
        to: GateStatus,
        kind: TransitionKind,
    ) -> Result<(), CoreError> {
        if from.can_transition_to(to, kind) {
            return Ok(());
        }
        Err(CoreError::InvalidTransition {
            entity_type: EntityType::Gate,
            id: self.id.clone(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn write_status(&mut self, status: GateStatus, source: TransitionKind, now: DateTime<Utc>) {
        self.status = Some(status);
        self.status_source = Some(source);
        self.updated_at = Some(now);
    }
}
