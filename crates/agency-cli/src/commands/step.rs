use agency_core::audit_detail::StepMovedDetail;
use agency_core::enums::{EntityType, RecomputeTrigger, StepStatus, TrailOp};
use agency_core::responses::GateRecalcResponse;
use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StepCommands;
use crate::commands::shared::gate_write::{changed, recalc_response, record_gate_change};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StepStatusResponse {
    step_id: String,
    moved: StepMovedDetail,
    gate: GateRecalcResponse,
}

/// Handle `agy step`.
pub async fn handle(
    action: &StepCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StepCommands::Status { id, status } => set_status(id, status, ctx, flags).await,
    }
}

async fn set_status(
    step_id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: StepStatus = parse_enum(status, "step status")?;
    let mut workflow = ctx.load_workflow().await?;
    let now = Utc::now();

    let moved = workflow.set_step_status(step_id, status)?;
    let write = workflow.recompute_module_gate(
        &moved.module_id,
        RecomputeTrigger::Automatic,
        ctx.policy(),
        now,
    )?;

    if moved.from != moved.to || changed(write.as_ref()) {
        ctx.save_workflow(&workflow).await?;
    }
    if moved.from != moved.to {
        ctx.trail
            .record(&workflow.id, TrailOp::StepStatus, EntityType::Step, step_id, &moved, now)?;
    }
    record_gate_change(ctx, &workflow.id, write.as_ref(), now)?;

    let response = StepStatusResponse {
        step_id: step_id.to_string(),
        gate: recalc_response(&moved.module_id, write.as_ref(), ctx.issue_limit(flags)),
        moved,
    };
    output(&response, flags.format)
}
