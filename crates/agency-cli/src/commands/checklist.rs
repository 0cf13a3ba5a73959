use agency_core::audit_detail::ToggledDetail;
use agency_core::enums::{EntityType, RecomputeTrigger, TrailOp};
use agency_core::responses::GateRecalcResponse;
use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChecklistCommands;
use crate::commands::shared::gate_write::{recalc_response, record_gate_change};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ToggleResponse {
    item_id: String,
    toggled: ToggledDetail,
    gate: GateRecalcResponse,
}

/// Handle `agy checklist`.
pub async fn handle(
    action: &ChecklistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChecklistCommands::Toggle { id } => toggle(id, ctx, flags).await,
    }
}

async fn toggle(item_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut workflow = ctx.load_workflow().await?;
    let now = Utc::now();

    let toggled = workflow.toggle_checklist_item(item_id, flags.actor.as_deref(), now)?;
    let write = workflow.recompute_module_gate(
        &toggled.module_id,
        RecomputeTrigger::Automatic,
        ctx.policy(),
        now,
    )?;

    ctx.save_workflow(&workflow).await?;
    ctx.trail.record(
        &workflow.id,
        TrailOp::Toggle,
        EntityType::ChecklistItem,
        item_id,
        &toggled,
        now,
    )?;
    record_gate_change(ctx, &workflow.id, write.as_ref(), now)?;

    let response = ToggleResponse {
        item_id: item_id.to_string(),
        gate: recalc_response(&toggled.module_id, write.as_ref(), ctx.issue_limit(flags)),
        toggled,
    };
    output(&response, flags.format)
}
