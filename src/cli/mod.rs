use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Calendar Date Dimension Generator
#[derive(Parser)]
#[command(name = "calendar-dimension")]
#[command(about = "Calendar Date Dimension Generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the calendar dimension and write it to the silver and gold tiers
    Generate(commands::generate::GenerateCommand),
    /// Derive and print the dimension row for a single date
    Show(commands::show::ShowCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(command) => command.run(),
        Commands::Show(command) => command.run(),
    }
}
