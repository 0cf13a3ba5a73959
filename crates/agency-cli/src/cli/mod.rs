use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `agy` binary.
#[derive(Debug, Parser)]
#[command(name = "agy", version, about = "Agency onboarding workflow gates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max gate issues to show (defaults to general.issue_limit)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .agency)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Workflow snapshot file (defaults to general.snapshot_path under the project)
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,

    /// User id recorded on checklist ticks and in the trail
    #[arg(long, global = true)]
    pub actor: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `fallback_format` applies when `--format` was not given.
    #[must_use]
    pub fn global_flags(&self, fallback_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(fallback_format),
            limit: self.limit,
            quiet: self.quiet,
            snapshot: self.snapshot.clone(),
            actor: self.actor.clone(),
        }
    }
}
