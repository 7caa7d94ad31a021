use anyhow::Context;
use clap::Parser;
use hba_db::service::TrackerService;

mod cli;
mod commands;
mod output;
mod repl;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("hba error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let service = TrackerService::new_local(&cli.db)
        .await
        .with_context(|| format!("failed to open tracker database '{}'", cli.db))?;

    repl::run(&service).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HBA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
