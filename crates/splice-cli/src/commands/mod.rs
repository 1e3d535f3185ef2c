//! Command implementations for splice-cli

pub mod append;
pub mod carve;
pub mod extract;
pub mod header;
pub mod probe;
pub mod remove;

pub use append::run_append;
pub use carve::run_carve;
pub use extract::run_extract;
pub use header::run_replace_header;
pub use probe::run_probe;
pub use remove::run_remove;

use splice_core::Encoding;

use crate::error::Result;

/// Parse a user-supplied encoding name.
pub(crate) fn parse_encoding(name: &str) -> Result<Encoding> {
    Ok(name.parse::<Encoding>()?)
}
