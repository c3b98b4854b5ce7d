//! # Parsing
//!
//! - **`rope`**: line iteration over an `xi_rope::Rope` with byte spans
//! - **`kinds`**: marker syntax (`>` prefixes, `[!comment]` headers)
//! - **`classify`**: per-line facts relative to the level being scanned
//! - **`extract`**: the recursive comment scanner
//! - **`timestamp`**: header timestamp parsing and formatting
//! - **`snapshot`**: test support, normalized views and invariant checks

pub mod classify;
pub mod cursor;
pub mod extract;
pub mod kinds;
pub mod rope;
pub mod snapshot;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use extract::{MAX_NESTING_DEPTH, extract, extract_comments};
pub use timestamp::{format_timestamp, parse_timestamp};
