use clap::Subcommand;

/// Module commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// Move the workflow past its current module if the gate allows it.
    Advance,
}
