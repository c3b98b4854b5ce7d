use crate::parsing::{
    kinds::{BlockQuote, Callout},
    rope::lines::LineRef,
};

/// A comment header found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub name: String,
    /// Raw text after the `|` separator, if the header has one.
    pub timestamp_text: Option<String>,
}

/// Classification of a single line containing only local facts.
///
/// Lines are classified relative to the level being scanned: `quoted` means
/// the line carries at least one more `>` prefix, and `unquoted` is the text
/// left after peeling exactly one of them off.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line continues a marker block at this level.
    pub quoted: bool,
    /// One `>` level removed and trimmed. Empty for unquoted lines.
    pub unquoted: String,
    /// Set when the line opens a comment at this level.
    pub header: Option<HeaderLine>,
}

/// Classifies individual lines for the comment scanner.
pub struct CommentLineClassifier;

impl CommentLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.trimmed();
        let Some(unquoted) = BlockQuote::strip_one(text) else {
            return LineClass {
                quoted: false,
                unquoted: String::new(),
                header: None,
            };
        };

        let header = Callout::parse_header(unquoted).map(|parts| HeaderLine {
            name: parts.name.to_string(),
            timestamp_text: parts.timestamp.map(str::to_string),
        });

        LineClass {
            quoted: true,
            unquoted: unquoted.to_string(),
            header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use xi_rope::Rope;

    fn classify_all(text: &str) -> Vec<LineClass> {
        let rope = Rope::from(text);
        lines_with_spans(&rope)
            .map(|lr| CommentLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn classifies_header_continuation_and_plain_lines() {
        let lines = classify_all("> [!comment] Ann | 05/07/2025\n>\n>> nested\nplain\n");

        let header = lines[0].header.as_ref().unwrap();
        assert_eq!(header.name, "Ann");
        assert_eq!(header.timestamp_text.as_deref(), Some("05/07/2025"));

        assert!(lines[1].quoted);
        assert_eq!(lines[1].unquoted, "");
        assert!(lines[1].header.is_none());

        assert_eq!(lines[2].unquoted, "> nested");
        assert!(!lines[3].quoted);
    }

    #[test]
    fn deeper_header_is_not_a_header_at_this_level() {
        let lines = classify_all(">> [!comment] B");
        assert!(lines[0].quoted);
        assert!(lines[0].header.is_none());
    }
}
