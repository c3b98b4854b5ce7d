//! # Tree Reconciliation
//!
//! Comments carry no identifiers in the document text, so UI state such as
//! `children_hidden` cannot follow a node by id across re-parses. Instead an
//! old node hands its state to the first fresh sibling that looks the same.
//!
//! What "looks the same" means is decided by a [`CommentMatcher`]. The
//! default [`ContentMatcher`] compares name, own content and child count:
//!
//! - edits elsewhere in the document shift positions but keep the match
//! - editing a comment's text, or adding/removing one of its children,
//!   breaks the match and the node falls back to its default state
//! - two siblings with the same name, text and child count are
//!   indistinguishable, and the first fresh one wins
//!
//! This is a best-effort heuristic. Matched pairs are reconciled recursively,
//! so nested nodes keep their state too.

use crate::models::Comment;

/// Decides whether a node from the previous parse corresponds to a fresh one.
pub trait CommentMatcher {
    fn matches(&self, previous: &Comment, fresh: &Comment) -> bool;
}

/// Matches on `(name, content, children.len())`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentMatcher;

impl CommentMatcher for ContentMatcher {
    fn matches(&self, previous: &Comment, fresh: &Comment) -> bool {
        previous.name == fresh.name
            && previous.content == fresh.content
            && previous.children.len() == fresh.children.len()
    }
}

/// Carries `children_hidden` from `previous` onto `fresh` and returns it.
///
/// With no previous tree the fresh one is returned untouched.
pub fn reconcile(previous: Option<&[Comment]>, mut fresh: Vec<Comment>) -> Vec<Comment> {
    if let Some(previous) = previous {
        reconcile_with(&ContentMatcher, previous, &mut fresh);
    }
    fresh
}

/// In-place reconciliation with a caller-chosen matcher.
pub fn reconcile_with<M: CommentMatcher>(matcher: &M, previous: &[Comment], fresh: &mut [Comment]) {
    for old in previous {
        let Some(new) = fresh.iter_mut().find(|new| matcher.matches(old, new)) else {
            continue;
        };
        new.children_hidden = old.children_hidden;
        reconcile_with(matcher, &old.children, &mut new.children);
    }
}
