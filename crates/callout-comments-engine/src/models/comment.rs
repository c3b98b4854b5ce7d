use chrono::NaiveDateTime;
use serde::Serialize;

/// A line position in document coordinates. Lines are 0-based; positions
/// produced by the extractor always have `ch == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct LinePos {
    pub line: usize,
    pub ch: usize,
}

impl LinePos {
    /// Start of `line`.
    pub fn line(line: usize) -> Self {
        Self { line, ch: 0 }
    }
}

/// One parsed comment block and the comments nested inside it.
///
/// Trees are rebuilt from text on every parse. The only state that outlives
/// a parse is `children_hidden`, which the reconciler carries forward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Author label from the header, cut at the `|` separator.
    pub name: String,
    /// Parsed header timestamp, `None` when missing or unreadable.
    pub timestamp: Option<NaiveDateTime>,
    /// The comment's own text, without nested comment blocks.
    pub content: String,
    /// Header line.
    pub start_pos: LinePos,
    /// First line after the block, nested comments included.
    pub end_pos: LinePos,
    /// The document line this comment chain annotates.
    pub content_pos: LinePos,
    /// Number of `>` levels on the header line.
    pub depth: usize,
    pub children: Vec<Comment>,
    /// UI-only: whether the children are collapsed.
    pub children_hidden: bool,
}

/// Address of a node inside a comment forest: child indexes from the root
/// list downwards. `[1, 0]` is the first child of the second top-level comment.
pub type CommentPath = [usize];

impl Comment {
    /// Number of document lines the block spans.
    pub fn line_span(&self) -> usize {
        self.end_pos.line.saturating_sub(self.start_pos.line)
    }

    /// Whether `line` falls inside this block.
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_pos.line..self.end_pos.line).contains(&line)
    }

    /// Depth-first, pre-order walk over this comment and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Sets `children_hidden` on this node and every descendant.
    pub fn set_hidden_recursive(&mut self, hidden: bool) {
        self.children_hidden = hidden;
        for child in &mut self.children {
            child.set_hidden_recursive(hidden);
        }
    }
}

/// Looks up a node by path. An empty path resolves to nothing.
pub fn find<'a>(comments: &'a [Comment], path: &CommentPath) -> Option<&'a Comment> {
    let (first, rest) = path.split_first()?;
    let node = comments.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find(&node.children, rest)
    }
}

/// Mutable variant of [`find`].
pub fn find_mut<'a>(comments: &'a mut [Comment], path: &CommentPath) -> Option<&'a mut Comment> {
    let (first, rest) = path.split_first()?;
    let node = comments.get_mut(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_mut(&mut node.children, rest)
    }
}

/// Pre-order iterator returned by [`Comment::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Comment>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
