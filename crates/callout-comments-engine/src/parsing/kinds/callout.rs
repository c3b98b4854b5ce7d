use std::sync::OnceLock;

use regex::Regex;

use super::BlockQuote;

/// Comment callout header syntax: `[!comment] <name> | <timestamp>`.
pub struct Callout;

/// The pieces of a header line after the callout type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    /// Author label, trimmed. Empty when the header names nobody.
    pub name: &'a str,
    /// Text after the `|` separator, trimmed. `None` when there is no separator.
    pub timestamp: Option<&'a str>,
}

impl Callout {
    /// The callout type written into new headers.
    pub const TYPE: &'static str = "[!comment]";
    /// Separator between author and timestamp.
    pub const SEPARATOR: char = '|';

    fn header_regex() -> &'static Regex {
        static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADER_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^\[!comment\][+-]?(?:\s+(.*))?$").expect("Invalid callout header regex")
        })
    }

    /// Parses a line that has already had one `>` level removed.
    ///
    /// Returns `None` unless the line is a comment callout header. The name is
    /// cut at the first `|` whether or not the timestamp part is meaningful.
    pub fn parse_header(unquoted: &str) -> Option<HeaderParts<'_>> {
        let caps = Self::header_regex().captures(unquoted.trim())?;
        let rest = caps.get(1).map_or("", |m| m.as_str());
        Some(match rest.split_once(Self::SEPARATOR) {
            Some((name, timestamp)) => HeaderParts {
                name: name.trim(),
                timestamp: Some(timestamp.trim()),
            },
            None => HeaderParts {
                name: rest.trim(),
                timestamp: None,
            },
        })
    }

    /// Whether a raw line (one `>` level not yet removed) opens a comment.
    pub fn is_header_line(line: &str) -> bool {
        BlockQuote::strip_one(line).is_some_and(|rest| Self::parse_header(rest).is_some())
    }

    /// Renders a header line at `depth`, e.g. `>> [!comment] Ann | [[2025-07-05]] 14:30`.
    pub fn render_header(depth: usize, author: &str, timestamp: &str) -> String {
        let mut line = format!("{} {} {}", BlockQuote::prefix(depth), Self::TYPE, author.trim());
        let timestamp = timestamp.trim();
        if !timestamp.is_empty() {
            line.push_str(&format!(" {} {timestamp}", Self::SEPARATOR));
        }
        line.trim_end().to_string()
    }
}
