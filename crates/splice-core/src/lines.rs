//! Line sequences and 1-based line ranges
//!
//! Every file operation in this crate works over a [`LineSequence`]: an
//! ordered list of lines where each line keeps its original terminator
//! (`\n` or `\r\n`). Concatenating the lines reproduces the source text
//! byte for byte, so slicing and reassembly never normalize anything.

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

/// An immutable sequence of terminator-preserving lines.
///
/// Index `i` holds source line `i + 1`; user-facing line numbers are
/// 1-based throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split `text` into lines, keeping each line's terminator.
    ///
    /// A final line without a trailing newline is kept as-is, and an empty
    /// input yields an empty sequence. CRLF terminators stay attached to
    /// their line; they are never rewritten.
    pub fn from_text(text: &str) -> Self {
        let lines = text.split_inclusive('\n').map(str::to_string).collect();
        Self { lines }
    }

    /// Number of lines in the sequence.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines, terminators included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Concatenate the lines back into text.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// A new sequence holding exactly the lines of `range`, in order.
    pub fn slice(&self, range: LineRange) -> Result<LineSequence> {
        let indices = range.resolve(self.len())?;
        Ok(Self {
            lines: self.lines[indices].to_vec(),
        })
    }

    /// A new sequence with the lines of `range` removed: everything before
    /// the range followed by everything after it.
    pub fn without(&self, range: LineRange) -> Result<LineSequence> {
        let indices = range.resolve(self.len())?;
        let mut lines = Vec::with_capacity(self.len() - indices.len());
        lines.extend_from_slice(&self.lines[..indices.start]);
        lines.extend_from_slice(&self.lines[indices.end..]);
        Ok(Self { lines })
    }

    /// A new sequence with the first `skip` lines dropped.
    ///
    /// A `skip` past the end clamps to an empty sequence rather than
    /// erroring; header replacement relies on this.
    pub fn tail(&self, skip: usize) -> LineSequence {
        let skip = skip.min(self.len());
        Self {
            lines: self.lines[skip..].to_vec(),
        }
    }
}

/// A 1-based line selection, inclusive on both ends.
///
/// `3-5` selects lines 3, 4, and 5. A range never denotes an empty
/// selection; `start > end` is rejected at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Validate against a sequence of `len` lines and convert to 0-based,
    /// half-open indices.
    pub fn resolve(&self, len: usize) -> Result<Range<usize>> {
        if self.start == 0 || self.end == 0 {
            return Err(self.invalid("line numbers are 1-based"));
        }
        if self.start > self.end {
            return Err(self.invalid("start is past end"));
        }
        if self.end > len {
            return Err(self.invalid(format!("file has only {len} lines")));
        }
        Ok(self.start - 1..self.end)
    }

    fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::InvalidRange {
            start: self.start,
            end: self.end,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
