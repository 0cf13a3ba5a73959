use agency_core::enums::{EntityType, TrailOp};
use agency_core::policy::RecomputeOutcome;
use agency_core::responses::GateRecalcResponse;
use agency_core::workflow::GateWrite;
use chrono::{DateTime, Utc};

use crate::context::AppContext;

/// Whether a recompute changed the stored gate status.
#[must_use]
pub fn changed(write: Option<&GateWrite>) -> bool {
    write.is_some_and(|write| write.change.is_some())
}

/// Append the status change of `write`, if any, to the workflow's trail.
pub fn record_gate_change(
    ctx: &AppContext,
    workflow_id: &str,
    write: Option<&GateWrite>,
    at: DateTime<Utc>,
) -> anyhow::Result<()> {
    let Some(write) = write else {
        return Ok(());
    };
    let Some(change) = &write.change else {
        return Ok(());
    };
    ctx.trail.record(
        workflow_id,
        TrailOp::Recompute,
        EntityType::Gate,
        &write.gate_id,
        change,
        at,
    )
}

/// Shape a recompute for output, keeping at most `limit` issues.
#[must_use]
pub fn recalc_response(
    module_id: &str,
    write: Option<&GateWrite>,
    limit: usize,
) -> GateRecalcResponse {
    let Some(write) = write else {
        return GateRecalcResponse {
            module_id: module_id.to_string(),
            gate_id: None,
            outcome: None,
            status: None,
            issues: Vec::new(),
        };
    };

    let validation = &write.recompute.validation;
    let status = match write.recompute.outcome {
        RecomputeOutcome::Updated { to, .. } => to,
        RecomputeOutcome::Preserved { manual } => manual,
        RecomputeOutcome::Unchanged => validation.status,
    };

    GateRecalcResponse {
        module_id: module_id.to_string(),
        gate_id: Some(write.gate_id.clone()),
        outcome: Some(write.recompute.outcome),
        status: Some(status),
        issues: validation.issues_truncated(limit).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use agency_core::audit_detail::StatusChangedDetail;
    use agency_core::enums::{GateStatus, RecomputeTrigger};
    use agency_core::gate::GateValidation;
    use agency_core::policy::{GateRecompute, RecomputeOutcome};
    use agency_core::workflow::GateWrite;
    use pretty_assertions::assert_eq;

    use super::{changed, recalc_response};

    fn write(outcome: RecomputeOutcome, change: Option<StatusChangedDetail>) -> GateWrite {
        GateWrite {
            module_id: "mod-1".into(),
            gate_id: "gat-1".into(),
            recompute: GateRecompute {
                trigger: RecomputeTrigger::Automatic,
                validation: GateValidation {
                    status: GateStatus::Pending,
                    issues: vec!["a".into(), "b".into(), "c".into()],
                },
                outcome,
            },
            change,
        }
    }

    #[test]
    fn no_gate_reports_nothing() {
        let response = recalc_response("mod-1", None, 5);
        assert_eq!(response.gate_id, None);
        assert_eq!(response.status, None);
        assert!(!changed(None));
    }

    #[test]
    fn preserved_reports_manual_status() {
        let write = write(
            RecomputeOutcome::Preserved {
                manual: GateStatus::Failed,
            },
            None,
        );
        let response = recalc_response("mod-1", Some(&write), 2);
        assert_eq!(response.status, Some(GateStatus::Failed));
        assert_eq!(response.issues, vec!["a".to_string(), "b".to_string()]);
        assert!(!changed(Some(&write)));
    }

    #[test]
    fn updated_reports_new_status() {
        let write = write(
            RecomputeOutcome::Updated {
                from: GateStatus::Passed,
                to: GateStatus::Pending,
            },
            Some(StatusChangedDetail {
                from: GateStatus::Passed,
                to: GateStatus::Pending,
                reason: Some("a".into()),
            }),
        );
        let response = recalc_response("mod-1", Some(&write), 5);
        assert_eq!(response.status, Some(GateStatus::Pending));
        assert_eq!(response.issues.len(), 3);
        assert!(changed(Some(&write)));
    }
}
