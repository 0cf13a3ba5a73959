use agency_core::entities::Workflow;
use agency_core::responses::{GateCheckResponse, StepSummary};
use agency_core::{GateValidation, blocking_reason, can_advance_module, validate_gate};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Fresh validation of a module's gate. Writes nothing.
pub async fn run(module_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workflow = ctx.load_workflow().await?;
    let module = workflow.module(module_id)?;
    let gate = module.gate.as_ref();

    let fresh = gate.map_or_else(GateValidation::passed, |gate| {
        validate_gate(&module.steps, gate.status)
    });
    let validations = Workflow::module_validations(module, ctx.policy());

    let response = GateCheckResponse {
        module_id: module.id.clone(),
        gate_id: gate.map(|gate| gate.id.clone()),
        conditions: gate.map(|gate| gate.conditions.clone()).unwrap_or_default(),
        stored_status: gate.and_then(|gate| gate.status),
        stored_source: gate.and_then(|gate| gate.status_source),
        validation: GateValidation {
            status: fresh.status,
            issues: fresh.issues_truncated(ctx.issue_limit(flags)).to_vec(),
        },
        advanceable: can_advance_module(module.gates(), &validations),
        blocking_reason: blocking_reason(module.gates(), &validations),
        steps: module.ordered_steps().into_iter().map(StepSummary::from).collect(),
    };
    output(&response, flags.format)
}
