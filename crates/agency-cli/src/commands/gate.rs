mod check;
mod recalc;
mod set;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GateCommands;
use crate::context::AppContext;

/// Handle `agy gate`.
pub async fn handle(
    action: &GateCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GateCommands::Check { module } => check::run(module, ctx, flags).await,
        GateCommands::Recalc { module } => recalc::run(module, ctx, flags).await,
        GateCommands::Set {
            module,
            status,
            reason,
        } => set::run(module, status, reason.as_deref(), ctx, flags).await,
    }
}
