use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::parsing::rope::{LineRef, lines_with_spans};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error("line {line} is out of range for a document of {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("line range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },
}

/// A whole-line edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// Insert `lines` so that the first of them becomes line `at`.
    InsertLines { at: usize, lines: Vec<String> },
    /// Remove the lines in `range`.
    RemoveLines { range: Range<usize> },
}

impl Splice {
    /// Applies the splice to `text`. The line count changes by exactly the
    /// number of inserted or removed lines.
    pub fn apply(&self, text: &str) -> Result<String, SpliceError> {
        let rope = Rope::from(text);
        let delta = compile_splice(&rope, self)?;
        Ok(delta.apply(&rope).to_string())
    }
}

/// Compiles a splice against the current rope into a delta.
pub fn compile_splice(rope: &Rope, splice: &Splice) -> Result<Delta<RopeInfo>, SpliceError> {
    let lines: Vec<LineRef> = lines_with_spans(rope).collect();
    let line_count = lines.len();
    let eol = line_break(&lines);
    let mut builder = Builder::new(rope.len());

    match splice {
        Splice::InsertLines { at, lines: new_lines } => {
            let at = *at;
            let text = match lines.get(at) {
                Some(_) => new_lines.iter().map(|l| format!("{l}{eol}")).collect::<String>(),
                None if at == line_count => match lines.last() {
                    // The last line has no break of its own: lead with one
                    // and leave the document unterminated as it was.
                    Some(last) if !last.has_newline() => {
                        format!("{eol}{}", new_lines.join(eol))
                    }
                    _ => new_lines.iter().map(|l| format!("{l}{eol}")).collect(),
                },
                None => return Err(SpliceError::LineOutOfRange { line: at, line_count }),
            };
            let offset = lines.get(at).map_or(rope.len(), |l| l.span.start);
            builder.replace(offset..offset, Rope::from(text));
        }
        Splice::RemoveLines { range } => {
            if range.start >= range.end {
                return Err(SpliceError::EmptyRange {
                    start: range.start,
                    end: range.end,
                });
            }
            if range.end > line_count {
                return Err(SpliceError::LineOutOfRange {
                    line: range.end - 1,
                    line_count,
                });
            }
            // The preceding line keeps its break, so the count drops by
            // exactly the number of removed lines.
            let bytes = lines[range.start].span.start..lines[range.end - 1].span.end;
            builder.delete(bytes);
        }
    }

    Ok(builder.build())
}

/// The document's line break, `\r\n` when its first line uses one.
fn line_break(lines: &[LineRef]) -> &'static str {
    match lines.first() {
        Some(line) if line.text.ends_with("\r\n") => "\r\n",
        _ => "\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::line_count;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn insert(at: usize, lines: &[&str]) -> Splice {
        Splice::InsertLines {
            at,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn count(text: &str) -> usize {
        line_count(&Rope::from(text))
    }

    #[rstest]
    #[case("a\nb\n", 0, "x\na\nb\n")]
    #[case("a\nb\n", 1, "a\nx\nb\n")]
    #[case("a\nb\n", 2, "a\nb\nx\n")]
    #[case("a\nb", 2, "a\nb\nx")]
    #[case("", 0, "x\n")]
    #[case("a\r\nb\r\n", 1, "a\r\nx\r\nb\r\n")]
    fn inserts_lines(#[case] text: &str, #[case] at: usize, #[case] expected: &str) {
        let result = insert(at, &["x"]).apply(text).unwrap();
        assert_eq!(result, expected);
        assert_eq!(count(&result), count(text) + 1);
    }

    #[rstest]
    #[case("a\nb\nc\n", 1..2, "a\nc\n")]
    #[case("a\nb\nc\n", 0..3, "")]
    #[case("a\nb\nc", 1..3, "a\n")]
    #[case("a\nb\nc", 0..3, "")]
    #[case("a\r\nb\r\nc", 2..3, "a\r\nb\r\n")]
    fn removes_lines(#[case] text: &str, #[case] range: Range<usize>, #[case] expected: &str) {
        let removed = range.len();
        let result = Splice::RemoveLines { range }.apply(text).unwrap();
        assert_eq!(result, expected);
        assert_eq!(count(&result), count(text) - removed);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            insert(5, &["x"]).apply("a\n"),
            Err(SpliceError::LineOutOfRange {
                line: 5,
                line_count: 1
            })
        );
        assert_eq!(
            Splice::RemoveLines { range: 0..3 }.apply("a\nb\n"),
            Err(SpliceError::LineOutOfRange {
                line: 2,
                line_count: 2
            })
        );
        assert_eq!(
            Splice::RemoveLines { range: 1..1 }.apply("a\nb\n"),
            Err(SpliceError::EmptyRange { start: 1, end: 1 })
        );
    }
}
