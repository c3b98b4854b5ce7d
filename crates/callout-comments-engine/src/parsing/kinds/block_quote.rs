/// Blockquote prefix syntax.
///
/// Peeling one `>` level off a line and writing a prefix back out for a
/// given depth both live here.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Peels exactly one `>` level off a line (leading whitespace allowed),
    /// returning the rest trimmed. `None` when the line is not quoted.
    pub fn strip_one(s: &str) -> Option<&str> {
        s.trim_start()
            .strip_prefix(Self::PREFIX)
            .map(str::trim)
    }

    /// Renders the prefix for `depth` levels, e.g. `>>` for depth 2.
    pub fn prefix(depth: usize) -> String {
        std::iter::repeat_n(Self::PREFIX, depth).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_one_peels_a_single_level() {
        assert_eq!(BlockQuote::strip_one(">> [!comment] B"), Some("> [!comment] B"));
        assert_eq!(BlockQuote::strip_one("  >   text  "), Some("text"));
        assert_eq!(BlockQuote::strip_one(">"), Some(""));
        assert_eq!(BlockQuote::strip_one("text"), None);
    }

    #[test]
    fn spaced_levels_peel_one_at_a_time() {
        let once = BlockQuote::strip_one("> > [!comment] B");
        assert_eq!(once, Some("> [!comment] B"));
        assert_eq!(once.and_then(BlockQuote::strip_one), Some("[!comment] B"));
    }

    #[test]
    fn prefix_repeats_marker() {
        assert_eq!(BlockQuote::prefix(1), ">");
        assert_eq!(BlockQuote::prefix(3), ">>>");
    }
}
