use std::path::PathBuf;

use agency_config::AgencyConfig;
use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

use cli::OutputFormat;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agy error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(OutputFormat::Json);
        ui::init(&flags);
        return commands::schema::handle(args, &flags);
    }

    let project_root = resolve_project_root(cli.project.as_deref())?;
    let config = AgencyConfig::load_with_dotenv(&project_root)
        .context("failed to load agency configuration")?;

    let fallback =
        OutputFormat::from_config(&config.general.default_format).unwrap_or(OutputFormat::Json);
    let flags = cli.global_flags(fallback);
    ui::init(&flags);

    let ctx = context::AppContext::init(&project_root, config, &flags);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGENCY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == context::AGENCY_DIR)
        {
            return explicit
                .parent()
                .map(std::path::Path::to_path_buf)
                .context("invalid --project path: '.agency' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not an agency project (no .agency directory found)")
}
