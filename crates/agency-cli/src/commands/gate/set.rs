use agency_core::enums::{EntityType, GateOverride, GateStatus, TrailOp};
use agency_core::responses::GateOverrideResponse;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Manually set a gate status.
pub async fn run(
    module_id: &str,
    status: &str,
    reason: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: GateStatus = parse_enum(status, "gate status")?;
    let action = GateOverride::from_target(status);

    let mut workflow = ctx.load_workflow().await?;
    let now = Utc::now();
    let (gate_id, change) =
        workflow.override_module_gate(module_id, action, reason.map(str::to_string), now)?;

    if let Some(change) = &change {
        ctx.save_workflow(&workflow).await?;
        ctx.trail
            .record(&workflow.id, TrailOp::Override, EntityType::Gate, &gate_id, change, now)?;
    } else {
        tracing::info!(gate = %gate_id, %status, "gate already holds status");
    }

    let response = GateOverrideResponse {
        module_id: module_id.to_string(),
        gate_id,
        status,
        change,
    };
    output(&response, flags.format)
}
