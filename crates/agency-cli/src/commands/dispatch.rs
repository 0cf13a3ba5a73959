use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Gate { action } => commands::gate::handle(&action, ctx, flags).await,
        Commands::Step { action } => commands::step::handle(&action, ctx, flags).await,
        Commands::Checklist { action } => commands::checklist::handle(&action, ctx, flags).await,
        Commands::Module { action } => commands::module::handle(&action, ctx, flags).await,
        Commands::Workflow { action } => commands::workflow::handle(&action, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
