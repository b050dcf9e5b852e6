use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::span::Span;

/// A block of identical text shared by the source and the target document:
/// `source_text[source..source + length] == target_text[target..target +
/// length]`, with all offsets counted in characters.
///
/// A list of matches is expected to be ascending on both offsets and
/// non-overlapping, which is what sequence matchers such as
/// [`crate::matching_blocks`] produce.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub source: usize,
    pub target: usize,
    pub length: usize,
}

impl Match {
    #[must_use]
    pub fn new(source: usize, target: usize, length: usize) -> Self {
        debug_assert!(length > 0, "Matches must cover at least one character");

        Self {
            source,
            target,
            length,
        }
    }

    #[must_use]
    pub fn source_end(&self) -> usize { self.source + self.length }

    #[must_use]
    pub fn target_end(&self) -> usize { self.target + self.length }

    #[must_use]
    pub fn source_span(&self) -> Span { Span::new(self.source, self.source_end()) }

    #[must_use]
    pub fn target_span(&self) -> Span { Span::new(self.target, self.target_end()) }
}

impl From<(usize, usize, usize)> for Match {
    fn from((source, target, length): (usize, usize, usize)) -> Self {
        Match::new(source, target, length)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Match(source={}, target={}, length={})",
            self.source, self.target, self.length
        )
    }
}
