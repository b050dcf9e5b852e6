use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of (UTF-8) character indices in a
/// document's text.
///
/// Spans order by `start` first and `end` second, which is the order
/// annotations are read in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start ({start}) must not exceed its end ({end})");

        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Returns true if `other` lies entirely within `self`. Every span
    /// encloses itself.
    #[must_use]
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Move both boundaries by `offset` characters, stopping at zero.
    #[must_use]
    pub fn shift(&self, offset: isize) -> Self {
        Self {
            start: self.start.saturating_add_signed(offset),
            end: self.end.saturating_add_signed(offset),
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self { Span::new(range.start, range.end) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_encloses() {
        let outer = Span::new(2, 10);

        assert!(outer.encloses(&outer));
        assert!(outer.encloses(&Span::new(2, 5)));
        assert!(outer.encloses(&Span::new(5, 10)));
        assert!(outer.encloses(&Span::new(4, 4)));
        assert!(!outer.encloses(&Span::new(1, 5)));
        assert!(!outer.encloses(&Span::new(5, 11)));
    }

    #[test]
    fn test_shift_and_ordering() {
        assert_eq!(Span::new(1, 3).shift(4), Span::new(5, 7));
        assert_eq!(Span::new(1, 3).shift(0), Span::new(1, 3));
        assert_eq!(Span::new(6, 7).shift(-4), Span::new(2, 3));

        let mut spans = vec![Span::new(4, 6), Span::new(0, 9), Span::new(0, 5)];
        spans.sort();
        assert_eq!(spans, vec![Span::new(0, 5), Span::new(0, 9), Span::new(4, 6)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::from(3..8).to_string(), "(3,8)");
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(3, 3).is_empty());
    }
}
