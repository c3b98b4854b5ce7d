pub mod debounce;
pub mod editing;
pub mod index;
pub mod models;
pub mod parsing;
pub mod reconcile;

// Re-export key types for easier usage
pub use debounce::Debouncer;
pub use editing::{Patch, SpliceError, splice_insert_at_cursor, splice_insert_child, splice_remove};
pub use index::CommentIndex;
pub use models::{Comment, CommentPath, LinePos, find, find_mut};
pub use parsing::{extract, extract_comments, format_timestamp, parse_timestamp};
pub use reconcile::{CommentMatcher, ContentMatcher, reconcile, reconcile_with};
