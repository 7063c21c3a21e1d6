/// A byte range `[start, end)` into the source rope.
///
/// Blocks and inline nodes record spans instead of copied text; slicing the
/// rope with a span reproduces that part of the source exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction so a
    /// reversed span reads as empty.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves a span that is relative to some sub-slice into absolute rope
    /// coordinates.
    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: base + self.start,
            end: base + self.end,
        }
    }

    /// True when `other` begins exactly where `self` ends.
    #[must_use]
    pub fn abuts(self, other: Span) -> bool {
        self.end == other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_span_is_empty() {
        assert!(Span::new(5, 2).is_empty());
        assert_eq!(Span::new(5, 2).len(), 0);
    }

    #[test]
    fn offset_shifts_both_ends() {
        assert_eq!(Span::new(1, 4).offset(10), Span::new(11, 14));
    }

    #[test]
    fn abuts_only_when_touching() {
        assert!(Span::new(0, 4).abuts(Span::new(4, 9)));
        assert!(!Span::new(0, 4).abuts(Span::new(5, 9)));
    }
}
