use clap::Subcommand;

/// Checklist item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChecklistCommands {
    /// Tick or untick an item and recompute its module's gate.
    Toggle { id: String },
}
