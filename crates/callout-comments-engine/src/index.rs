use std::collections::HashMap;

use relative_path::{RelativePath, RelativePathBuf};

use crate::{
    models::{Comment, CommentPath, find, find_mut},
    parsing::extract_comments,
    reconcile::reconcile,
};

/// The last known comment tree of every open document.
///
/// This is the only state kept between parses. An entry is created by the
/// first [`parse`](Self::parse) of a document, replaced wholesale by every
/// later one, and dropped with [`forget`](Self::forget).
#[derive(Debug, Default)]
pub struct CommentIndex {
    documents: HashMap<RelativePathBuf, Vec<Comment>>,
    collapse_by_default: bool,
}

impl CommentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comments seen for the first time start collapsed when `collapsed` is set.
    pub fn with_collapse_by_default(collapsed: bool) -> Self {
        Self {
            documents: HashMap::new(),
            collapse_by_default: collapsed,
        }
    }

    /// Re-parses `text` for `doc`, carrying collapsed state over from the
    /// previous tree, and stores the result.
    pub fn parse(&mut self, doc: &RelativePath, text: &str) -> &[Comment] {
        let mut fresh = extract_comments(text);
        if self.collapse_by_default {
            for comment in &mut fresh {
                comment.set_hidden_recursive(true);
            }
        }

        let previous = self.documents.remove(doc);
        let merged = reconcile(previous.as_deref(), fresh);
        log::debug!("{doc}: {} top-level comments", merged.len());

        self.documents
            .entry(doc.to_relative_path_buf())
            .or_insert(merged)
            .as_slice()
    }

    /// The last parsed tree for `doc`.
    pub fn comments(&self, doc: &RelativePath) -> Option<&[Comment]> {
        self.documents.get(doc).map(Vec::as_slice)
    }

    /// Looks up one node of `doc` by path.
    pub fn find(&self, doc: &RelativePath, path: &CommentPath) -> Option<&Comment> {
        find(self.documents.get(doc)?, path)
    }

    /// Flips `children_hidden` on a node, returning the new value.
    pub fn toggle(&mut self, doc: &RelativePath, path: &CommentPath) -> Option<bool> {
        let node = find_mut(self.documents.get_mut(doc)?, path)?;
        node.children_hidden = !node.children_hidden;
        Some(node.children_hidden)
    }

    /// Drops the stored tree for `doc`, returning it.
    pub fn forget(&mut self, doc: &RelativePath) -> Option<Vec<Comment>> {
        self.documents.remove(doc)
    }

    /// Documents that currently have a stored tree.
    pub fn documents(&self) -> impl Iterator<Item = &RelativePath> {
        self.documents.keys().map(RelativePathBuf::as_relative_path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
Claim.
> [!comment] Ann
> first
>> [!comment] Bob
>> reply
";

    fn path(p: &str) -> &RelativePath {
        RelativePath::new(p)
    }

    #[test]
    fn first_parse_creates_entry() {
        let mut index = CommentIndex::new();
        assert!(index.is_empty());

        let comments = index.parse(path("notes/a.md"), DOC);
        assert_eq!(comments.len(), 1);
        assert!(!comments[0].children_hidden);
        assert_eq!(index.len(), 1);
        assert_eq!(index.documents().collect::<Vec<_>>(), [path("notes/a.md")]);
    }

    #[test]
    fn toggle_survives_reparse() {
        let mut index = CommentIndex::new();
        let doc = path("a.md");
        index.parse(doc, DOC);

        assert_eq!(index.toggle(doc, &[0]), Some(true));
        let edited = format!("Intro.\n{DOC}");
        let comments = index.parse(doc, &edited);
        assert!(comments[0].children_hidden);

        assert_eq!(index.toggle(doc, &[0]), Some(false));
        assert_eq!(index.find(doc, &[0]).map(|c| c.children_hidden), Some(false));
    }

    #[test]
    fn toggle_missing_targets() {
        let mut index = CommentIndex::new();
        assert_eq!(index.toggle(path("a.md"), &[0]), None);
        index.parse(path("a.md"), DOC);
        assert_eq!(index.toggle(path("a.md"), &[3]), None);
        assert_eq!(index.toggle(path("a.md"), &[0, 0]), Some(true));
    }

    #[test]
    fn documents_are_independent() {
        let mut index = CommentIndex::new();
        index.parse(path("a.md"), DOC);
        index.parse(path("b.md"), DOC);
        index.toggle(path("a.md"), &[0]);

        assert!(index.comments(path("a.md")).unwrap()[0].children_hidden);
        assert!(!index.comments(path("b.md")).unwrap()[0].children_hidden);
    }

    #[test]
    fn forget_discards_state() {
        let mut index = CommentIndex::new();
        index.parse(path("a.md"), DOC);
        index.toggle(path("a.md"), &[0]);

        assert!(index.forget(path("a.md")).is_some());
        assert!(index.comments(path("a.md")).is_none());
        assert!(!index.parse(path("a.md"), DOC)[0].children_hidden);
    }

    #[test]
    fn collapse_by_default_applies_to_new_comments_only() {
        let mut index = CommentIndex::with_collapse_by_default(true);
        let doc = path("a.md");
        index.parse(doc, DOC);
        assert!(index.comments(doc).unwrap()[0].walk().all(|c| c.children_hidden));

        index.toggle(doc, &[0]);
        let comments = index.parse(doc, DOC);
        assert!(!comments[0].children_hidden);
        assert!(comments[0].children[0].children_hidden);
    }
}
