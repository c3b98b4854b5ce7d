use std::ops::Range;

use xi_rope::Rope;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Range<usize>,
    /// The line text, including its line break if it has one.
    pub text: String,
}

impl LineRef {
    /// The line text with any trailing `\n` / `\r\n` removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Whether the line is terminated by a line break.
    pub fn has_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, so that the spans tile the
/// whole rope and splices can address exact byte ranges.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: start..offset,
            text: line.into_owned(),
        }
    })
}

/// Number of lines in the rope. A trailing newline does not open a new line
/// and an empty rope has no lines.
pub fn line_count(rope: &Rope) -> usize {
    rope.lines_raw(..).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("a\nbc\n\nd");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].span, 2..5);
        assert_eq!(lines[3].span.end, rope.len());
        assert_eq!(lines[1].trimmed(), "bc");
        assert!(!lines[3].has_newline());
    }

    #[test]
    fn line_count_ignores_trailing_newline() {
        assert_eq!(line_count(&Rope::from("")), 0);
        assert_eq!(line_count(&Rope::from("a")), 1);
        assert_eq!(line_count(&Rope::from("a\n")), 1);
        assert_eq!(line_count(&Rope::from("a\n\n")), 2);
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let rope = Rope::from("> x\r\n> y");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines[0].trimmed(), "> x");
        assert_eq!(lines[1].trimmed(), "> y");
    }
}
