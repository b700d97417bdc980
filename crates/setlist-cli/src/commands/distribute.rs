//! Distribute command implementation
//!
//! Drives the load -> discover -> confirm -> replace sequence. The
//! confirmation gate sits between discovery and replacement; every path that
//! declines it exits cleanly with no writes performed.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use setlist_sync::{DEFAULT_EXCLUDED_SEGMENTS, SetListReplacer};

use crate::error::Result;
use crate::prompt::confirm_replacement;

/// Options for the distribute command
#[derive(Debug, Clone, Default)]
pub struct DistributeOptions {
    /// Skip the confirmation prompt
    pub yes: bool,
    /// Report discovered locations without prompting or writing
    pub dry_run: bool,
    /// Emit a JSON report instead of human-readable output
    pub json: bool,
    /// Extra excluded path segments, appended to the defaults
    pub exclude: Vec<String>,
}

/// Machine-readable report for `distribute --json`
#[derive(Debug, Serialize)]
struct DistributionReport {
    discovered: Vec<PathBuf>,
    replaced: usize,
}

/// Run the distribute command against `root`, reading confirmation from stdin.
pub fn run_distribute(root: &Path, options: &DistributeOptions) -> Result<()> {
    let excluded = DEFAULT_EXCLUDED_SEGMENTS
        .iter()
        .map(|s| s.to_string())
        .chain(options.exclude.iter().cloned());
    let mut replacer = SetListReplacer::new(excluded);

    if !options.json {
        println!("{} Loading contents of master list...", "=>".blue().bold());
    }
    replacer.load_master()?;

    if !options.json {
        println!(
            "{} Walking {} for set lists...",
            "=>".blue().bold(),
            root.display()
        );
    }
    replacer.discover(root)?;

    if !options.json {
        if replacer.locations().is_empty() {
            println!("No setList.txt files found under {}.", root.display());
        } else {
            println!("These locations were found:");
            for location in replacer.locations() {
                println!(" -> {}", location.display());
            }
        }
    }

    if options.dry_run || replacer.locations().is_empty() {
        return finish(&replacer, 0, options.json);
    }

    let confirmed = if options.yes {
        true
    } else {
        confirm_replacement(&mut io::stdin().lock(), &mut io::stdout())?
    };
    if !confirmed {
        if !options.json {
            println!("Aborting replacement, no changes made");
        }
        return finish(&replacer, 0, options.json);
    }

    if !options.json {
        println!("{} Performing replacements...", "=>".blue().bold());
    }

    match replacer.apply_replacements() {
        Ok(count) => finish(&replacer, count, options.json),
        Err(e) => {
            eprintln!(
                "{}: set lists may be left in an inconsistent state",
                "warning".yellow().bold()
            );
            Err(e.into())
        }
    }
}

fn finish(replacer: &SetListReplacer, replaced: usize, json: bool) -> Result<()> {
    if json {
        let report = DistributionReport {
            discovered: replacer.locations().to_vec(),
            replaced,
        };
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if replaced > 0 {
        println!(
            "{} Replacements completed: {} file(s) updated.",
            "OK".green().bold(),
            replaced
        );
    }
    Ok(())
}
