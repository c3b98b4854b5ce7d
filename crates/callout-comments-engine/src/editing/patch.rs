use std::ops::Range;

use crate::models::LinePos;

/// Result of an insertion action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// The full document text after the edit.
    pub text: String,
    /// Lines of `text` that were inserted.
    pub inserted: Range<usize>,
    /// Where the author should start typing: end of the new content line.
    pub content_pos: LinePos,
}

impl Patch {
    /// 1-based line number of the new content line, as editors display it.
    pub fn content_line_number(&self) -> usize {
        self.content_pos.line + 1
    }
}
