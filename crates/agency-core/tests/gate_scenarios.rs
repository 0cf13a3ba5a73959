//! End-to-end gate behaviour over realistic onboarding modules.

use agency_core::entities::{ChecklistItem, Gate, Step};
use agency_core::enums::{GateStatus, StepStatus};
use agency_core::{GateValidation, blocking_reason, can_advance_module, validate_gate};
use pretty_assertions::assert_eq;

fn step(name: &str, status: StepStatus, checklist: &[bool]) -> Step {
    Step {
        id: format!("stp-{name}"),
        name: name.to_string(),
        status,
        assignee_id: Some("usr-am".into()),
        order_index: None,
        checklist: checklist
            .iter()
            .enumerate()
            .map(|(index, done)| ChecklistItem {
                id: format!("chk-{name}-{index}"),
                name: format!("{name} check {index}"),
                is_completed: *done,
                completed_by: None,
                completed_at: None,
            })
            .collect(),
    }
}

fn gate(id: &str, status: Option<GateStatus>) -> Gate {
    Gate {
        id: id.to_string(),
        name: id.to_string(),
        conditions: vec!["Tracking verified in GA4".into()],
        status,
        status_source: None,
        updated_at: None,
    }
}

#[test]
fn scenario_a_todo_step_keeps_gate_pending() {
    let steps = [
        step("pixel", StepStatus::Done, &[true]),
        step("conversions", StepStatus::Todo, &[]),
    ];
    let result = validate_gate(&steps, None);

    assert_eq!(result.status, GateStatus::Pending);
    assert_eq!(result.issues.len(), 1);
    assert!(result.issues[0].contains("conversions"));
}

#[test]
fn scenario_b_blocked_step_blocks_gate() {
    let steps = [
        step("pixel", StepStatus::Blocked, &[]),
        step("conversions", StepStatus::Done, &[true]),
    ];
    let result = validate_gate(&steps, None);

    assert_eq!(result.status, GateStatus::Blocked);
    assert!(!result.issues.is_empty());
}

#[test]
fn scenario_c_no_steps_passes() {
    let result = validate_gate(&[], None);
    assert_eq!(
        result,
        GateValidation {
            status: GateStatus::Passed,
            issues: vec![],
        }
    );
}

#[test]
fn scenario_d_pending_gate_blocks_advancement() {
    let gates = [
        gate("gat-access", Some(GateStatus::Passed)),
        gate("gat-tracking", Some(GateStatus::Pending)),
    ];
    let validations = [
        validate_gate(&[step("access", StepStatus::Done, &[true])], gates[0].status),
        validate_gate(
            &[
                step("pixel", StepStatus::Doing, &[]),
                step("ga4", StepStatus::Todo, &[]),
            ],
            gates[1].status,
        ),
    ];

    assert!(!can_advance_module(&gates, &validations));
    let reason = blocking_reason(&gates, &validations).expect("module is blocked");
    assert_eq!(reason.gate_id, "gat-tracking");
    assert_eq!(reason.message, validations[1].issues[0]);
}

#[test]
fn done_step_with_single_open_item_is_the_only_issue() {
    let steps = [step("pixel", StepStatus::Done, &[false])];
    let result = validate_gate(&steps, Some(GateStatus::Passed));

    assert_eq!(result.status, GateStatus::Pending);
    assert_eq!(result.issues.len(), 1);
    assert!(result.issues[0].contains("pixel"));
}

#[test]
fn blocked_anywhere_means_blocked() {
    let others = [
        step("a", StepStatus::Done, &[true]),
        step("b", StepStatus::Review, &[]),
        step("c", StepStatus::Done, &[false]),
    ];
    for position in 0..=others.len() {
        let mut steps = others.to_vec();
        steps.insert(position, step("stuck", StepStatus::Blocked, &[]));
        assert_eq!(validate_gate(&steps, None).status, GateStatus::Blocked);
    }
}

#[test]
fn issues_keep_input_order() {
    let names = ["zeta", "alpha", "mid", "beta"];
    let steps: Vec<Step> = names
        .iter()
        .map(|name| step(name, StepStatus::Backlog, &[]))
        .collect();

    let result = validate_gate(&steps, None);
    for (issue, name) in result.issues.iter().zip(names) {
        assert!(issue.contains(name), "{issue} should mention {name}");
    }
}

#[test]
fn module_without_gates_advances() {
    assert!(can_advance_module(&[], &[]));
}
