//! Text-in, text-out implementations of the subcommands.

use anyhow::{Context, Result, bail};
use callout_comments_config::Config;
use callout_comments_engine::{
    Comment, CommentIndex, Patch, find, format_timestamp, splice_insert_at_cursor,
    splice_insert_child, splice_remove,
};
use chrono::NaiveDateTime;
use relative_path::RelativePathBuf;
use std::path::Path;

/// Who is writing, and when.
pub struct Stamp {
    pub author: String,
    pub at: NaiveDateTime,
}

impl Stamp {
    fn timestamp_text(&self) -> String {
        format_timestamp(self.at)
    }
}

/// Parses a dotted index path such as `0.1` (second reply of the first comment).
pub fn parse_comment_path(input: &str) -> Result<Vec<usize>> {
    if input.trim().is_empty() {
        bail!("comment path is empty");
    }
    input
        .trim()
        .split('.')
        .map(|part| {
            part.parse::<usize>()
                .with_context(|| format!("invalid comment path segment '{part}' in '{input}'"))
        })
        .collect()
}

pub fn list(config: &Config, file: &Path, text: &str) -> Vec<Comment> {
    let doc = RelativePathBuf::from(file.to_string_lossy().as_ref());
    let mut index = CommentIndex::with_collapse_by_default(config.collapse_by_default);
    index.parse(&doc, text).to_vec()
}

pub fn render_tree(comments: &[Comment]) -> String {
    let mut out = String::new();
    render_level(comments, &mut Vec::new(), &mut out);
    out.trim_end().to_string()
}

fn render_level(comments: &[Comment], path: &mut Vec<usize>, out: &mut String) {
    for (i, comment) in comments.iter().enumerate() {
        path.push(i);
        let indent = "  ".repeat(comment.depth.saturating_sub(1));
        let marker = match (comment.children.is_empty(), comment.children_hidden) {
            (true, _) => '*',
            (false, true) => '+',
            (false, false) => '-',
        };
        let dotted: Vec<String> = path.iter().map(usize::to_string).collect();
        let when = comment
            .timestamp
            .map(|ts| format!(" ({})", ts.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        out.push_str(&format!(
            "{indent}{marker} {} {}{when}: {}\n",
            dotted.join("."),
            comment.name,
            comment.content.replace('\n', " / ")
        ));
        if !comment.children_hidden {
            render_level(&comment.children, path, out);
        }
        path.pop();
    }
}

/// Inserts a new top-level comment before the 1-based `line`.
pub fn add(text: &str, line: usize, stamp: &Stamp, message: Option<&str>) -> Result<String> {
    let Some(cursor_line) = line.checked_sub(1) else {
        bail!("line numbers start at 1");
    };
    let patch = splice_insert_at_cursor(text, cursor_line, &stamp.author, &stamp.timestamp_text())?;
    log::info!("new comment by {} at line {}", stamp.author, patch.content_line_number());
    Ok(fill_content(patch, message))
}

pub fn reply(text: &str, path: &[usize], stamp: &Stamp, message: Option<&str>) -> Result<String> {
    let comments = callout_comments_engine::extract_comments(text);
    let parent = find(&comments, path).with_context(|| no_such_comment(path))?;
    let patch = splice_insert_child(text, parent, &stamp.author, &stamp.timestamp_text())?;
    log::info!(
        "reply by {} to {} at line {}",
        stamp.author,
        parent.name,
        patch.content_line_number()
    );
    Ok(fill_content(patch, message))
}

pub fn remove(text: &str, path: &[usize]) -> Result<String> {
    let comments = callout_comments_engine::extract_comments(text);
    let target = find(&comments, path).with_context(|| no_such_comment(path))?;
    Ok(splice_remove(text, target)?)
}

fn no_such_comment(path: &[usize]) -> String {
    let dotted: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("no comment at path {}", dotted.join("."))
}

/// Types `message` into the new comment's empty content line.
fn fill_content(patch: Patch, message: Option<&str>) -> String {
    let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) else {
        return patch.text;
    };
    let line_start: usize = patch
        .text
        .split_inclusive('\n')
        .take(patch.content_pos.line)
        .map(str::len)
        .sum();
    let mut text = patch.text;
    text.insert_str(line_start + patch.content_pos.ch, &message.replace('\n', " "));
    text
}
