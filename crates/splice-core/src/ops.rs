//! One-shot line-range operations over files
//!
//! Each operation is a read-validate-write pipeline: decode the inputs,
//! slice by a [`LineRange`], then write the result. Validation happens
//! before any write, so a bad range or unreadable input leaves every file
//! untouched. With `dry_run` set, the write step is skipped entirely and
//! the outcome reports what would have been written.

use std::path::Path;

use tracing::debug;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::io;
use crate::lines::LineRange;

/// Outcome of [`extract_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Lines written to the destination.
    pub lines: usize,
}

/// Copy the lines of `range` from `source` into `dest`, replacing whatever
/// `dest` held before. The source file is never modified.
pub fn extract_range(
    source: &Path,
    range: LineRange,
    dest: &Path,
    encoding: Encoding,
    dry_run: bool,
) -> Result<ExtractOutcome> {
    let lines = io::read_lines(source, encoding)?;
    let slice = lines.slice(range)?;

    if !dry_run {
        io::write_atomic(dest, &slice.to_text())?;
    }

    debug!(source = %source.display(), %range, lines = slice.len(), "extracted range");
    Ok(ExtractOutcome { lines: slice.len() })
}

/// Outcome of [`append_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Lines appended to the destination.
    pub lines: usize,
}

/// Append the lines of `range` from `source` to the end of `dest`,
/// creating `dest` when it does not exist yet.
///
/// Used to move a file in slices: extract the first range, then append the
/// following ones.
pub fn append_range(
    source: &Path,
    range: LineRange,
    dest: &Path,
    encoding: Encoding,
    dry_run: bool,
) -> Result<AppendOutcome> {
    let lines = io::read_lines(source, encoding)?;
    let slice = lines.slice(range)?;

    if !dry_run {
        io::append_text(dest, &slice.to_text())?;
    }

    debug!(source = %source.display(), %range, lines = slice.len(), "appended range");
    Ok(AppendOutcome { lines: slice.len() })
}

/// Outcome of [`remove_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Lines removed from the file.
    pub removed: usize,
    /// Lines the file holds afterwards.
    pub remaining: usize,
}

/// Delete the lines of `range` from `file` in place, joining what precedes
/// the range to what follows it.
pub fn remove_range(
    file: &Path,
    range: LineRange,
    encoding: Encoding,
    dry_run: bool,
) -> Result<RemoveOutcome> {
    let lines = io::read_lines(file, encoding)?;
    let kept = lines.without(range)?;
    let removed = lines.len() - kept.len();

    if !dry_run {
        io::write_atomic(file, &kept.to_text())?;
    }

    debug!(file = %file.display(), %range, removed, "removed range");
    Ok(RemoveOutcome {
        removed,
        remaining: kept.len(),
    })
}

/// Outcome of [`replace_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceHeaderOutcome {
    /// Lines dropped from the top of the target.
    pub skipped: usize,
    /// Target lines kept after the skipped prefix.
    pub kept: usize,
}

/// Replace the first `skip` lines of `target` with the full content of
/// `header_file`.
///
/// The header content is spliced in verbatim; no separator is inserted
/// between it and the first kept line. A `skip` larger than the target
/// clamps, leaving just the header.
pub fn replace_header(
    target: &Path,
    header_file: &Path,
    skip: usize,
    encoding: Encoding,
    dry_run: bool,
) -> Result<ReplaceHeaderOutcome> {
    let header = io::read_text(header_file, encoding)?;
    let lines = io::read_lines(target, encoding)?;
    let rest = lines.tail(skip);
    let skipped = lines.len() - rest.len();

    if !dry_run {
        let mut content = header;
        content.push_str(&rest.to_text());
        io::write_atomic(target, &content)?;
    }

    debug!(target = %target.display(), skipped, kept = rest.len(), "replaced header");
    Ok(ReplaceHeaderOutcome {
        skipped,
        kept: rest.len(),
    })
}
