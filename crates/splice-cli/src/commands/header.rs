//! Replace-header command implementation

use std::path::Path;

use colored::Colorize;

use splice_core::ops;

use crate::commands::parse_encoding;
use crate::error::Result;

/// Run the replace-header command
///
/// Swaps the first `skip` lines of the target for the content of the
/// header file.
pub fn run_replace_header(
    target: &Path,
    header: &Path,
    skip: usize,
    encoding: &str,
    dry_run: bool,
) -> Result<()> {
    let encoding = parse_encoding(encoding)?;

    println!(
        "{} Replacing the first {} lines of {} with {}",
        "=>".blue().bold(),
        skip.to_string().cyan(),
        target.display(),
        header.display()
    );

    let outcome = ops::replace_header(target, header, skip, encoding, dry_run)?;

    if outcome.skipped < skip {
        println!(
            "{} Target only had {} lines to drop.",
            "WARN".yellow().bold(),
            outcome.skipped
        );
    }

    if dry_run {
        println!(
            "{} Would keep {} lines under the new header (dry-run).",
            "OK".green().bold(),
            outcome.kept
        );
    } else {
        println!(
            "{} Header replaced; {} lines kept.",
            "OK".green().bold(),
            outcome.kept
        );
    }

    Ok(())
}
