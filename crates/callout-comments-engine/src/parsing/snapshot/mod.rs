//! # Snapshot Testing Support
//!
//! Utilities for testing the extractor via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: converts a comment forest to a stable `Snap` for `insta`
//! - **`invariants`**: structural checks every extracted forest must pass
//!   (ranges ordered and nested, uniform content line per chain)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
