use clap::Parser;

/// Top-level CLI parser for the `hba` binary.
#[derive(Debug, Parser)]
#[command(
    name = "hba",
    version,
    about = "HBA project tracker - students, projects, and grades"
)]
pub struct Cli {
    /// Path to the tracker database file
    #[arg(long, default_value = "hba.db")]
    pub db: String,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
