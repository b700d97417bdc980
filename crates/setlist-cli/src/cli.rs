//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use setlist_registry::SETLIST_ENV;

/// Set-List Distributor - Keep duplicate set lists in step with the master copy
#[derive(Parser, Debug)]
#[command(name = "setlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace every duplicate setList.txt under a root with the master copy
    ///
    /// Loads setList.master.txt from the working directory, walks the root
    /// collecting setList.txt locations outside the excluded path segments,
    /// then overwrites each one after confirmation.
    ///
    /// Examples:
    ///   setlist distribute ./assets            # Prompt before writing
    ///   setlist distribute ./assets --yes      # Non-interactive
    ///   setlist distribute ./assets --dry-run  # Report locations only
    Distribute {
        /// Root directory to scan
        root: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Report discovered locations without prompting or writing
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Extra excluded path segments, on top of the defaults
        #[arg(long, value_name = "SEGMENT")]
        exclude: Vec<String>,
    },

    /// Print the registry entries, or the foil-variant mapping
    Sets {
        /// Print the set -> foil variant mapping instead of the flat list
        #[arg(long)]
        foils: bool,

        /// Directory holding setList.txt (defaults to the working directory)
        #[arg(long, env = SETLIST_ENV, value_name = "DIR")]
        source_dir: Option<PathBuf>,
    },
}
