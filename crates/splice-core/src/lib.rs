//! Line-range and marker-block splicing engine
//!
//! Reads a file as a sequence of terminator-preserving lines or as one
//! decoded text blob, slices it by 1-based inclusive line ranges or by
//! literal marker pairs, and writes results back with atomic overwrites.

pub mod carve;
pub mod encoding;
pub mod error;
pub mod io;
pub mod lines;
pub mod marker;
pub mod ops;

pub use carve::{CarveFailure, CarveJob, CarveManifest, CarveOutcome, CarveReport};
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use lines::{LineRange, LineSequence};
pub use marker::MarkerSpan;
pub use ops::{AppendOutcome, ExtractOutcome, RemoveOutcome, ReplaceHeaderOutcome};
