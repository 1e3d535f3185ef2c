//! Probe command implementation

use std::path::Path;

use colored::Colorize;

use splice_core::{Encoding, LineSequence, io};

use crate::commands::parse_encoding;
use crate::error::Result;

/// Characters of decoded text shown as a preview
const PREVIEW_CHARS: usize = 100;

/// Run the probe command
///
/// Reports the first candidate encoding that decodes the file, with line
/// and character counts and a short preview. Legacy UTF-16 files are the
/// common case, so the default candidate order tries utf-16 first.
pub fn run_probe(file: &Path, encoding_names: &[String]) -> Result<()> {
    let candidates = if encoding_names.is_empty() {
        vec![Encoding::Utf16, Encoding::Utf8]
    } else {
        encoding_names
            .iter()
            .map(|name| parse_encoding(name))
            .collect::<Result<Vec<_>>>()?
    };

    println!("{} Probing {}", "=>".blue().bold(), file.display());

    let (text, encoding) = io::read_text_with_fallback(file, &candidates)?;
    let lines = LineSequence::from_text(&text).len();

    println!(
        "{} Decoded as {} ({} lines, {} chars).",
        "OK".green().bold(),
        encoding.to_string().cyan(),
        lines,
        text.chars().count()
    );

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    for line in preview.lines() {
        println!("   {line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf16le_bytes(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_run_probe_detects_utf16_by_default() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("legacy.tsx");
        fs::write(&file, utf16le_bytes("const App = 1;\n")).unwrap();

        assert!(run_probe(&file, &[]).is_ok());
    }

    #[test]
    fn test_run_probe_with_explicit_candidates() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "hello\n").unwrap();

        assert!(run_probe(&file, &["utf-8".to_string()]).is_ok());
    }

    #[test]
    fn test_run_probe_rejects_unknown_encoding_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "hello\n").unwrap();

        assert!(run_probe(&file, &["latin-1".to_string()]).is_err());
    }

    #[test]
    fn test_run_probe_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(run_probe(&temp.path().join("absent.txt"), &[]).is_err());
    }

    #[test]
    fn test_run_probe_undecodable_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("binary.bin");
        // Five bytes: invalid UTF-8 and an odd length for UTF-16.
        fs::write(&file, [0xFF, 0x00, 0xD8, 0x00, 0xD8]).unwrap();

        assert!(run_probe(&file, &[]).is_err());
    }
}
