/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Operates over one line of text while tracking the absolute byte position
/// in the original rope (via `base` offset). All delimiters the inline
/// parser looks for are ASCII, so every position it stops at is a char
/// boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the next occurrence of `pat` at or after the cursor.
    ///
    /// Returns false and leaves the cursor in place when there is none.
    pub fn seek(&mut self, pat: &str) -> bool {
        match self.s.get(self.i..).and_then(|rest| rest.find(pat)) {
            Some(at) => {
                self.i += at;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("[label](url)", 0);
        assert!(cur.starts_with(b"["));
        assert!(!cur.starts_with(b"]("));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("ab", 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn seek_finds_next_occurrence() {
        let mut cur = Cursor::new("[a](b) [c](d)", 0);
        cur.bump();
        assert!(cur.seek("]("));
        assert_eq!(cur.pos(), 2);
        cur.bump_n(2);
        assert!(cur.seek("]("));
        assert_eq!(cur.pos(), 9);
    }

    #[test]
    fn failed_seek_keeps_position() {
        let mut cur = Cursor::new("no closer", 5);
        cur.bump_n(3);
        assert!(!cur.seek(")"));
        assert_eq!(cur.pos(), 8);
    }
}
