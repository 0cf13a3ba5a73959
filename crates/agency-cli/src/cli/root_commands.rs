use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ChecklistCommands, GateCommands, ModuleCommands, StepCommands, WorkflowCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Gate validation and overrides.
    Gate {
        #[command(subcommand)]
        action: GateCommands,
    },
    /// Step board moves.
    Step {
        #[command(subcommand)]
        action: StepCommands,
    },
    /// Checklist items.
    Checklist {
        #[command(subcommand)]
        action: ChecklistCommands,
    },
    /// Module progression.
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Workflow overview.
    Workflow {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Print the JSON Schema of a document type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type: workflow, trail, or status.
    #[arg(default_value = "workflow")]
    pub type_name: String,
}
