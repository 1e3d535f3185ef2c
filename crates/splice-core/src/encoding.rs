//! Text encodings for reading source files
//!
//! Files produced by modern tooling are UTF-8, but editors on Windows and
//! some code generators still emit UTF-16 with a byte-order mark. Reading
//! picks one explicit encoding (or tries a candidate list in order); output
//! is always written as UTF-8.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// A text encoding a source file may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Encoding {
    /// UTF-8, the default working encoding.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16 with an optional byte-order mark. Without a BOM the bytes
    /// are taken as little-endian.
    #[serde(rename = "utf-16", alias = "utf16")]
    Utf16,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }

    /// Decode `bytes` under this encoding.
    ///
    /// For UTF-16, a leading BOM (`FF FE` little-endian, `FE FF`
    /// big-endian) selects the byte order and is stripped from the decoded
    /// text.
    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<String, DecodeError> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| DecodeError::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            }),
            Self::Utf16 => decode_utf16(bytes),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            _ => Err(Error::UnknownEncoding {
                name: s.to_string(),
            }),
        }
    }
}

/// Why a byte sequence failed to decode under a given encoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("odd byte length {len} for a 16-bit encoding")]
    OddLength { len: usize },

    #[error("invalid UTF-16: unpaired surrogate")]
    UnpairedSurrogate,
}

fn decode_utf16(bytes: &[u8]) -> std::result::Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: bytes.len() });
    }

    let (payload, big_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        _ => (bytes, false),
    };

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|_| DecodeError::UnpairedSurrogate)
}
