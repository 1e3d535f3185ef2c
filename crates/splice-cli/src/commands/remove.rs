//! Remove command implementation

use std::path::Path;

use colored::Colorize;

use splice_core::{LineRange, ops};

use crate::commands::parse_encoding;
use crate::error::Result;

/// Run the remove command
///
/// Deletes a line range from a file in place.
pub fn run_remove(
    file: &Path,
    start: usize,
    end: usize,
    encoding: &str,
    dry_run: bool,
) -> Result<()> {
    let encoding = parse_encoding(encoding)?;
    let range = LineRange::new(start, end);

    println!(
        "{} Removing lines {} from {}",
        "=>".blue().bold(),
        range.to_string().cyan(),
        file.display()
    );

    let outcome = ops::remove_range(file, range, encoding, dry_run)?;

    if dry_run {
        println!(
            "{} Would remove {} lines, keeping {} (dry-run).",
            "OK".green().bold(),
            outcome.removed,
            outcome.remaining
        );
    } else {
        println!(
            "{} Removed {} lines; {} remain.",
            "OK".green().bold(),
            outcome.removed,
            outcome.remaining
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_remove_deletes_range_in_place() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "a\nb\nc\nd\n").unwrap();

        let result = run_remove(&file, 2, 3, "utf-8", false);

        assert!(result.is_ok());
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nd\n");
    }

    #[test]
    fn test_run_remove_dry_run_keeps_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "a\nb\n").unwrap();

        let result = run_remove(&file, 1, 1, "utf-8", true);

        assert!(result.is_ok());
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_run_remove_invalid_range_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "a\nb\n").unwrap();

        let result = run_remove(&file, 2, 1, "utf-8", false);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\n");
    }
}
