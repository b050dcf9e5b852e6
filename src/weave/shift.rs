use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{span::Span, text_match::Match};

/// Maps target positions to source positions.
///
/// Each match contributes a threshold (its target offset) and the offset
/// to add to any target position at or after that threshold. A position
/// takes the offset of the greatest threshold not exceeding it, or no
/// offset at all before the first threshold.
///
/// When the source is an augmented version of the target, text is only
/// inserted, offsets are never negative and `shift` is monotonic. Matches
/// checked leniently may skip over target text the source rewrote shorter;
/// the offsets after such a rewrite are negative and shifted positions
/// saturate at zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftMap {
    shift_if_ge: BTreeMap<usize, isize>,
}

impl ShiftMap {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Build the map from a whole match list.
    #[must_use]
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut map = Self::new();
        for text_match in matches {
            map.record(text_match);
        }

        map
    }

    /// Record the threshold contributed by a single match and return its
    /// offset.
    pub fn record(&mut self, text_match: &Match) -> isize {
        let offset = text_match.source as isize - text_match.target as isize;
        if offset < 0 {
            log::warn!("Match ({text_match}) shifts target text backwards by {}", -offset);
        } else {
            log::trace!("Shifting target positions >= {} by {offset}", text_match.target);
        }

        self.shift_if_ge.insert(text_match.target, offset);
        offset
    }

    /// The offset applying to a target `position`.
    #[must_use]
    pub fn offset(&self, position: usize) -> isize {
        self.shift_if_ge
            .range(..=position)
            .next_back()
            .map_or(0, |(_, offset)| *offset)
    }

    /// Translate a target position to the source.
    #[must_use]
    pub fn shift(&self, position: usize) -> usize {
        position.saturating_add_signed(self.offset(position))
    }

    /// Translate a target span to the source.
    ///
    /// The end is shifted as the position of the last character in the
    /// span, so a span ending right where inserted text begins does not
    /// stretch over the insertion. Empty spans move with their start, and
    /// non-empty spans stay non-empty even across a negative offset.
    #[must_use]
    pub fn shift_span(&self, span: Span) -> Span {
        let start = self.shift(span.start);
        if span.is_empty() {
            return Span::new(start, start);
        }

        let end = self.shift(span.end - 1) + 1;
        Span::new(start, end.max(start + 1))
    }

    /// Thresholds and their offsets in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = (usize, isize)> + '_ {
        self.shift_if_ge
            .iter()
            .map(|(threshold, offset)| (*threshold, *offset))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.shift_if_ge.is_empty() }
}
