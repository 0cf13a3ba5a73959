use agency_core::enums::RecomputeTrigger;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::gate_write::{changed, recalc_response, record_gate_change};
use crate::context::AppContext;
use crate::output::output;

/// Explicit recompute: the fresh result replaces any manual status.
pub async fn run(module_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut workflow = ctx.load_workflow().await?;
    let now = Utc::now();
    let write =
        workflow.recompute_module_gate(module_id, RecomputeTrigger::Explicit, ctx.policy(), now)?;

    if changed(write.as_ref()) {
        ctx.save_workflow(&workflow).await?;
        record_gate_change(ctx, &workflow.id, write.as_ref(), now)?;
    } else {
        tracing::info!(module = module_id, "gate status unchanged");
    }

    let response = recalc_response(module_id, write.as_ref(), ctx.issue_limit(flags));
    output(&response, flags.format)
}
