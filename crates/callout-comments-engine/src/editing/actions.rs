use crate::{
    editing::{
        patch::Patch,
        splice::{Splice, SpliceError},
    },
    models::{Comment, LinePos},
    parsing::kinds::{BlockQuote, Callout},
};

/// Adds an empty reply at the end of `parent`'s block.
///
/// Three lines go in after the block's last line: a blank continuation line
/// at the parent's depth, a header one level deeper, and an empty content
/// line for the reply. The reply therefore becomes the parent's last child.
pub fn splice_insert_child(
    text: &str,
    parent: &Comment,
    author: &str,
    timestamp_text: &str,
) -> Result<Patch, SpliceError> {
    let anchor = parent
        .end_pos
        .line
        .saturating_sub(1)
        .max(parent.start_pos.line);
    let at = anchor + 1;
    let depth = parent.depth + 1;

    let content_line = format!("{} ", BlockQuote::prefix(depth));
    let content_pos = LinePos {
        line: at + 2,
        ch: content_line.len(),
    };
    let lines = vec![
        BlockQuote::prefix(parent.depth),
        Callout::render_header(depth, author, timestamp_text),
        content_line,
    ];

    log::debug!(
        "inserting reply to '{}' (line {}) at line {at}",
        parent.name,
        parent.start_pos.line
    );
    let inserted = at..at + lines.len();
    let text = Splice::InsertLines { at, lines }.apply(text)?;
    Ok(Patch {
        text,
        inserted,
        content_pos,
    })
}

/// Removes `comment`'s whole block, nested replies included.
pub fn splice_remove(text: &str, comment: &Comment) -> Result<String, SpliceError> {
    log::debug!(
        "removing '{}' (lines {}..{})",
        comment.name,
        comment.start_pos.line,
        comment.end_pos.line
    );
    Splice::RemoveLines {
        range: comment.start_pos.line..comment.end_pos.line,
    }
    .apply(text)
}

/// Opens a new top-level comment at `cursor_line`: a header and an empty
/// content line. Whatever was on `cursor_line` moves down two lines.
pub fn splice_insert_at_cursor(
    text: &str,
    cursor_line: usize,
    author: &str,
    timestamp_text: &str,
) -> Result<Patch, SpliceError> {
    let content_line = format!("{} ", BlockQuote::prefix(1));
    let content_pos = LinePos {
        line: cursor_line + 1,
        ch: content_line.len(),
    };
    let lines = vec![Callout::render_header(1, author, timestamp_text), content_line];

    let inserted = cursor_line..cursor_line + lines.len();
    let text = Splice::InsertLines {
        at: cursor_line,
        lines,
    }
    .apply(text)?;
    Ok(Patch {
        text,
        inserted,
        content_pos,
    })
}
