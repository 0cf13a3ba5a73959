use clap::Subcommand;

/// Workflow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkflowCommands {
    /// Per-module status, gate status, and advanceability.
    Status,
}
