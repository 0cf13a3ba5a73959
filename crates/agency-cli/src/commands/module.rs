use agency_core::enums::{EntityType, TrailOp};
use agency_core::responses::ModuleAdvanceResponse;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agy module`.
pub async fn handle(
    action: &ModuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModuleCommands::Advance => advance(ctx, flags).await,
    }
}

async fn advance(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut workflow = ctx.load_workflow().await?;
    let advanced = workflow.advance(ctx.policy())?;

    ctx.save_workflow(&workflow).await?;
    ctx.trail.record(
        &workflow.id,
        TrailOp::Advance,
        EntityType::Module,
        &advanced.from_module,
        &advanced,
        Utc::now(),
    )?;

    let response = ModuleAdvanceResponse {
        workflow_id: workflow.id,
        advanced,
    };
    output(&response, flags.format)
}
