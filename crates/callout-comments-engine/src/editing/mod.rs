/*!
 * # Editing
 *
 * Structural user actions on the comment tree become plain text edits:
 *
 * - **reply**: [`splice_insert_child`] adds a nested comment at the end of a block
 * - **remove**: [`splice_remove`] drops a block with everything nested in it
 * - **new comment**: [`splice_insert_at_cursor`] opens a top-level comment
 *
 * Each action compiles to a line-level [`Splice`], which compiles to an
 * `xi_rope` `Delta` and is applied to the document text. The caller writes the
 * new text back and re-parses; the tree itself is never patched.
 *
 * ## Stale positions
 *
 * The actions trust the positions of the comment they are given. Positions
 * must come from a parse of the exact text being edited. Positions past the
 * end of the text are rejected with [`SpliceError`], but a stale position that
 * still lands inside the document silently edits the wrong lines.
 */

pub mod actions;
pub mod patch;
pub mod splice;

pub use actions::{splice_insert_at_cursor, splice_insert_child, splice_remove};
pub use patch::Patch;
pub use splice::{Splice, SpliceError};
