use clap::Subcommand;

/// Step commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StepCommands {
    /// Move a step to another column and recompute its module's gate.
    Status { id: String, status: String },
}
