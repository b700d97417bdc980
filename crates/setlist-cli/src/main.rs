//! Set-List Distributor CLI
//!
//! The command-line interface for distributing the master set list to every
//! duplicate copy under an asset tree, and for inspecting the registry.

mod cli;
mod commands;
mod error;
mod prompt;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::DistributeOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Distribute {
            root,
            yes,
            dry_run,
            json,
            exclude,
        } => {
            let options = DistributeOptions {
                yes,
                dry_run,
                json,
                exclude,
            };
            commands::run_distribute(&root, &options)
        }
        Commands::Sets { foils, source_dir } => commands::run_sets(foils, source_dir.as_deref()),
    }
}
