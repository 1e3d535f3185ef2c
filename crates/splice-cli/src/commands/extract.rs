//! Extract command implementation

use std::path::Path;

use colored::Colorize;

use splice_core::{LineRange, ops};

use crate::commands::parse_encoding;
use crate::error::Result;

/// Run the extract command
///
/// Copies a line range of the source into a new file, replacing the
/// destination's previous content.
pub fn run_extract(
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
        "{} Extracting lines {} of {}",
        "=>".blue().bold(),
        range.to_string().cyan(),
        source.display()
    );

    let outcome = ops::extract_range(source, range, dest, encoding, dry_run)?;

    if dry_run {
        println!(
            "{} Would write {} lines to {} (dry-run).",
            "OK".green().bold(),
            outcome.lines,
            dest.display().to_string().cyan()
        );
    } else {
        println!(
            "{} Wrote {} lines to {}.",
            "OK".green().bold(),
            outcome.lines,
            dest.display().to_string().cyan()
        );
    }

    Ok(())
}
