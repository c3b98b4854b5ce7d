use serde::Serialize;

use crate::models::Comment;

/// Snapshot of an extracted comment forest for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub comments: Vec<CommentSnap>,
}

/// Snapshot of a single comment. Positions are flattened to line numbers and
/// the timestamp is rendered as text so snapshots stay readable.
#[derive(Debug, Serialize)]
pub struct CommentSnap {
    pub name: String,
    pub timestamp: Option<String>,
    pub lines: String,
    pub content_line: usize,
    pub content: String,
    pub children: Vec<CommentSnap>,
}

/// Converts a comment forest into a serializable snapshot.
pub fn normalize(comments: &[Comment]) -> Snap {
    Snap {
        comments: comments.iter().map(normalize_one).collect(),
    }
}

fn normalize_one(c: &Comment) -> CommentSnap {
    CommentSnap {
        name: c.name.clone(),
        timestamp: c
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
        lines: format!("{}..{}", c.start_pos.line, c.end_pos.line),
        content_line: c.content_pos.line,
        content: c.content.clone(),
        children: c.children.iter().map(normalize_one).collect(),
    }
}
