use crate::{models::Comment, parsing::rope::line_count};

/// Validates extractor output invariants against the text it came from.
///
/// Asserts that:
/// - Every block is non-empty and ends within the document
/// - Siblings are in document order and do not overlap
/// - Children lie inside their parent's line range, one level deeper
/// - Every node in a chain shares the chain's content line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, comments: &[Comment]) {
    let lines = line_count(&xi_rope::Rope::from(text));
    check_siblings(comments, lines, None);
}

fn check_siblings(comments: &[Comment], lines: usize, parent: Option<&Comment>) {
    let mut previous_end = parent.map_or(0, |p| p.start_pos.line + 1);
    for c in comments {
        assert!(
            c.start_pos.line < c.end_pos.line,
            "empty block: {:?}..{:?} ({})",
            c.start_pos,
            c.end_pos,
            c.name
        );
        assert!(
            c.end_pos.line <= lines,
            "block ends past the document: {:?} (line count: {lines})",
            c.end_pos
        );
        assert!(
            c.start_pos.line >= previous_end,
            "block {} at {:?} overlaps its previous sibling ending at {previous_end}",
            c.name,
            c.start_pos
        );
        previous_end = c.end_pos.line;

        match parent {
            Some(p) => {
                assert!(
                    c.end_pos.line <= p.end_pos.line,
                    "child {} ends at {:?}, outside parent {} ending at {:?}",
                    c.name,
                    c.end_pos,
                    p.name,
                    p.end_pos
                );
                assert_eq!(
                    c.content_pos, p.content_pos,
                    "child {} does not share its parent's content line",
                    c.name
                );
                assert_eq!(c.depth, p.depth + 1, "child {} has wrong depth", c.name);
            }
            None => {
                assert_eq!(
                    c.content_pos, c.end_pos,
                    "top-level {} must annotate its own end line",
                    c.name
                );
                assert_eq!(c.depth, 1, "top-level {} has wrong depth", c.name);
            }
        }

        check_siblings(&c.children, lines, Some(c));
    }
}
