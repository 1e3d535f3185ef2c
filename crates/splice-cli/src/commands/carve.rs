//! Carve command implementation
//!
//! Drives manifest-based block extraction and reports per-job results the
//! way sync-style commands report actions.

use std::path::Path;

use colored::Colorize;

use splice_core::{CarveManifest, carve};

use crate::error::{CliError, Result};

/// Run the carve command
///
/// Loads the manifest and runs every extraction job, printing one line per
/// job. A partial failure still runs the remaining jobs; the command exits
/// with an error listing how many jobs failed.
pub fn run_carve(manifest_path: &Path, dry_run: bool) -> Result<()> {
    println!(
        "{} Carving blocks listed in {}",
        "=>".blue().bold(),
        manifest_path.display()
    );

    let manifest = CarveManifest::load(manifest_path)?;
    if manifest.jobs.is_empty() {
        println!("{} Manifest lists no jobs.", "OK".green().bold());
        return Ok(());
    }

    // Relative job paths resolve against the manifest's directory.
    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let report = carve::carve_all(&manifest, base, dry_run);

    for outcome in &report.outcomes {
        if dry_run {
            println!(
                "   {} would write {} ({} bytes, read as {})",
                "+".green(),
                outcome.dest.display().to_string().cyan(),
                outcome.bytes,
                outcome.encoding
            );
        } else {
            println!(
                "   {} {} ({} bytes, read as {})",
                "+".green(),
                outcome.dest.display().to_string().cyan(),
                outcome.bytes,
                outcome.encoding
            );
        }
    }
    for failure in &report.failures {
        eprintln!(
            "   {} {}: {}",
            "!".red(),
            failure.dest.display(),
            failure.error
        );
    }

    if report.success() {
        println!(
            "{} Carved {} blocks.",
            "OK".green().bold(),
            report.outcomes.len()
        );
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} carve jobs failed",
            report.failures.len(),
            manifest.jobs.len()
        )))
    }
}
