//! File reading with explicit encodings and atomic writes
//!
//! Reads decode the whole file up front under an explicit [`Encoding`] (or
//! the first workable one from a candidate list). Overwrites go through a
//! write-to-temp-then-rename so a failure mid-write never leaves a
//! half-written destination. Output is always UTF-8, whatever encoding the
//! input was read under.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::lines::LineSequence;

/// Read and decode a whole file under one explicit encoding.
pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    let text = encoding.decode(&bytes).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        encoding,
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), %encoding, bytes = bytes.len(), "decoded file");
    Ok(text)
}

/// Read a file into a terminator-preserving line sequence.
pub fn read_lines(path: &Path, encoding: Encoding) -> Result<LineSequence> {
    Ok(LineSequence::from_text(&read_text(path, encoding)?))
}

/// Try each candidate encoding in order and return the first decode that
/// succeeds, together with the encoding that produced it.
///
/// The file is read once; only decoding is retried. When every candidate
/// fails, the error lists each attempted encoding with its failure reason.
pub fn read_text_with_fallback(path: &Path, candidates: &[Encoding]) -> Result<(String, Encoding)> {
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;

    let mut attempts = Vec::new();
    for &encoding in candidates {
        match encoding.decode(&bytes) {
            Ok(text) => {
                debug!(path = %path.display(), %encoding, "decoded file from candidate list");
                return Ok((text, encoding));
            }
            Err(e) => attempts.push(format!("{encoding} ({e})")),
        }
    }

    Err(Error::NoUsableEncoding {
        path: path.to_path_buf(),
        attempts: attempts.join(", "),
    })
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename to prevent partial writes. The temp file
/// lives in the destination directory so the rename stays on one
/// filesystem.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
        }
    }

    // Generate temp file path in same directory (ensures same filesystem)
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    // Write to temp file
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::write(&temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::write(&temp_path, e))?;

    // Flush to disk before the rename makes the content visible
    temp_file
        .sync_all()
        .map_err(|e| Error::write(&temp_path, e))?;
    drop(temp_file);

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| Error::write(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Append content to the end of a file, creating it when absent.
pub fn append_text(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::write(path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::write(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "appended to file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_text(&temp.path().join("absent.txt"), Encoding::Utf8).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a/b/out.txt");
        write_atomic(&dest, "content\n").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.txt");
        fs::write(&dest, "old").unwrap();
        write_atomic(&dest, "new").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.txt");
        write_atomic(&dest, "content").unwrap();
        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.txt")]);
    }

    #[test]
    fn test_append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("log.txt");
        append_text(&dest, "first\n").unwrap();
        append_text(&dest, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "first\nsecond\n");
    }
}
