//! Append command implementation

use std::path::Path;

use colored::Colorize;

use splice_core::{LineRange, ops};

use crate::commands::parse_encoding;
use crate::error::Result;

/// Run the append command
///
/// Appends a line range of the source to the end of the destination,
/// creating it when missing.
pub fn run_append(
    source: &Path,
    start: usize,
    end: usize,
    dest: &Path,
    encoding: &str,
    dry_run: bool,
) -> Result<()> {
    let encoding = parse_encoding(encoding)?;
    let range = LineRange::new(start, end);

    println!(
        "{} Appending lines {} of {}",
        "=>".blue().bold(),
        range.to_string().cyan(),
        source.display()
    );

    let outcome = ops::append_range(source, range, dest, encoding, dry_run)?;

    if dry_run {
        println!(
            "{} Would append {} lines to {} (dry-run).",
            "OK".green().bold(),
            outcome.lines,
            dest.display().to_string().cyan()
        );
    } else {
        println!(
            "{} Appended {} lines to {}.",
            "OK".green().bold(),
            outcome.lines,
            dest.display().to_string().cyan()
        );
    }

    Ok(())
}
