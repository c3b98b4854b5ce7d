/// A cursor for byte-by-byte scanning of short header fragments.
///
/// All delimiters the header grammar cares about are ASCII, so advancing by
/// bytes never splits a multi-byte character at a point we slice on.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Consumes `pat` if the input continues with it.
    pub fn eat(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.i += pat.len();
            true
        } else {
            false
        }
    }

    /// Consumes input up to (not including) `pat`, returning it. Leaves the
    /// cursor untouched and returns `None` when `pat` never occurs.
    pub fn take_until(&mut self, pat: &str) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(pat)?;
        self.i += idx;
        Some(&rest[..idx])
    }

    /// Consumes a run of non-whitespace characters.
    pub fn take_word(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.i += len;
        &rest[..len]
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.i += rest.len() - rest.trim_start().len();
    }
}
