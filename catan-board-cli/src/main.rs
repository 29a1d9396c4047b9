//! Catan board CLI - Command-line interface
//!
//! Commands:
//! - generate: Write a shuffled standard board as server records
//! - inspect: Summarise a board file
//! - render: Print the visual state of every tile at a given pan/zoom

mod generate;
mod inspect;
mod render_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catan-board")]
#[command(about = "Catan board geometry and tile rendering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a standard board
    Generate(generate::GenerateArgs),
    /// Summarise the tiles of a board file
    Inspect(inspect::InspectArgs),
    /// Render a board file to visual state JSON
    Render(render_cmd::RenderArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Inspect(args) => inspect::run(args),
        Commands::Render(args) => render_cmd::run(args),
    }
}
