//! # Comment Extraction
//!
//! Turns text into a forest of [`Comment`]s.
//!
//! The scanner works on lines rather than on one large multi-line pattern:
//!
//! 1. Every line is classified relative to the current level (see
//!    [`CommentLineClassifier`]).
//! 2. A block starts at a header line and runs over the consecutive quoted
//!    lines after it. An unquoted line, the end of text or another header at
//!    the same level closes it.
//! 3. The block body, with one `>` level peeled off, is scanned again one
//!    level deeper to find nested comments.
//!
//! Positions are always reported in coordinates of the outermost text, which
//! is why each recursive call receives the line offset of the body it scans.

use xi_rope::Rope;

use crate::{
    models::{Comment, LinePos},
    parsing::{
        classify::{CommentLineClassifier, LineClass},
        kinds::Callout,
        rope::lines_with_spans,
        timestamp::parse_timestamp,
    },
};

/// Nesting levels scanned before the rest of a body is treated as plain content.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Extracts every comment in a full document.
pub fn extract_comments(text: &str) -> Vec<Comment> {
    let comments = extract(text, 0, None);
    log::debug!("extracted {} top-level comments", comments.len());
    comments
}

/// Extracts the comments in `text`.
///
/// - `line_offset`: document line at which `text` starts.
/// - `inherited_content_pos`: when scanning a comment body, the content line
///   of the enclosing chain. Top-level comments annotate their own end line.
pub fn extract(
    text: &str,
    line_offset: usize,
    inherited_content_pos: Option<LinePos>,
) -> Vec<Comment> {
    extract_at_depth(text, line_offset, inherited_content_pos, 1)
}

fn extract_at_depth(
    text: &str,
    line_offset: usize,
    inherited_content_pos: Option<LinePos>,
    depth: usize,
) -> Vec<Comment> {
    let rope = Rope::from(text);
    let classifier = CommentLineClassifier;
    let lines: Vec<LineClass> = lines_with_spans(&rope)
        .map(|lr| classifier.classify(&lr))
        .collect();

    let mut out = vec![];
    let mut i = 0;
    while i < lines.len() {
        if lines[i].header.is_none() {
            i += 1;
            continue;
        }

        let end = block_end(&lines, i);
        if let Some(comment) = build_comment(
            &lines[i..end],
            line_offset + i,
            inherited_content_pos,
            depth,
        ) {
            out.push(comment);
        }
        i = end;
    }
    out
}

/// Index one past the last line of the block whose header is at `start`.
///
/// A header at the same level ends the run even though it is quoted, so
/// stacked comments become siblings instead of one merged block.
fn block_end(lines: &[LineClass], start: usize) -> usize {
    let mut end = start + 1;
    while end < lines.len() && lines[end].quoted && lines[end].header.is_none() {
        end += 1;
    }
    end
}

fn build_comment(
    block: &[LineClass],
    start_line: usize,
    inherited_content_pos: Option<LinePos>,
    depth: usize,
) -> Option<Comment> {
    let (head, body) = block.split_first()?;
    let header = head.header.as_ref()?;

    let start_pos = LinePos::line(start_line);
    let end_pos = LinePos::line(start_line + block.len());
    let content_pos = inherited_content_pos.unwrap_or(end_pos);

    let body_lines: Vec<&str> = body.iter().map(|l| l.unquoted.as_str()).collect();

    let children = if depth < MAX_NESTING_DEPTH {
        extract_at_depth(
            &body_lines.join("\n"),
            start_line + 1,
            Some(content_pos),
            depth + 1,
        )
    } else {
        log::warn!(
            "comment at line {start_line} is nested {depth} levels deep; deeper comments are kept as content"
        );
        vec![]
    };

    // Own content stops where the first nested comment starts.
    let content = body_lines
        .iter()
        .take_while(|line| depth >= MAX_NESTING_DEPTH || !Callout::is_header_line(line))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Some(Comment {
        name: header.name.clone(),
        timestamp: header.timestamp_text.as_deref().and_then(parse_timestamp),
        content,
        start_pos,
        end_pos,
        content_pos,
        depth,
        children,
        children_hidden: false,
    })
}
