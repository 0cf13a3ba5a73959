use clap::Subcommand;

/// Gate commands. Gates are addressed by the module that owns them.
#[derive(Clone, Debug, Subcommand)]
pub enum GateCommands {
    /// Validate a module's gate without writing anything.
    Check { module: String },
    /// Recalculate a module's gate and store the fresh status.
    Recalc { module: String },
    /// Manually set a gate status: passed, failed, blocked, or pending.
    Set {
        module: String,
        status: String,
        #[arg(long)]
        reason: Option<String>,
    },
}
