//! sidenav CLI - Sidebar navigation for documentation sites.
//!
//! Provides commands for:
//! - `check`: Validate the sidebar and report every error
//! - `show`: Print the sidebar render view as JSON
//! - `page`: Print breadcrumb and previous/next links for a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PageArgs, ShowArgs};
use output::Output;

/// sidenav - Sidebar navigation for documentation sites.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the sidebar definition.
    Check(CheckArgs),
    /// Print the sidebar render view as JSON.
    Show(ShowArgs),
    /// Print navigation details for one page as JSON.
    Page(PageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Page(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
