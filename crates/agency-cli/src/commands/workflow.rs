use crate::cli::subcommands::WorkflowCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `agy workflow`.
pub async fn handle(
    action: &WorkflowCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorkflowCommands::Status => status(ctx, flags).await,
    }
}

async fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workflow = ctx.load_workflow().await?;
    let report = workflow.status_report(ctx.policy());

    if flags.format != OutputFormat::Table {
        return output(&report, flags.format);
    }

    if !flags.quiet {
        let state = if report.completed { "completed" } else { "in progress" };
        println!("{} [{}] {state}", report.name, report.workflow_id);
    }
    output(&report.modules, flags.format)
}
