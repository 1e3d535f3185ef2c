//! Literal marker scanning
//!
//! Locates a block of text delimited by a pair of literal markers. Markers
//! are plain substrings, not patterns; the typical use is a function or
//! component signature as the start marker and the next signature as the
//! end marker.

use crate::error::{Error, Result};

/// A byte span located between two markers in a text blob.
///
/// `start` is the offset of the start marker's first byte; `end` is the
/// offset of the end marker's first byte. The spanned text begins with the
/// start marker itself and stops just before the end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub start: usize,
    pub end: usize,
}

impl MarkerSpan {
    /// The spanned text within `text`, which must be the blob the span was
    /// located in.
    pub fn text_in<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the first occurrence of `start_marker`, then the first occurrence
/// of `end_marker` at or after it.
///
/// Both scans are forward, leftmost-match, case-sensitive. An occurrence
/// of the end marker before the start marker never terminates the block.
/// The end scan starts at the start marker's own offset, so identical
/// markers yield an empty span.
pub fn locate(text: &str, start_marker: &str, end_marker: &str) -> Result<MarkerSpan> {
    let start = text
        .find(start_marker)
        .ok_or_else(|| Error::StartMarkerNotFound {
            marker: start_marker.to_string(),
        })?;

    let end = text[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| Error::EndMarkerNotFound {
            marker: end_marker.to_string(),
            after: start,
        })?;

    Ok(MarkerSpan { start, end })
}
