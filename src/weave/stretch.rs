#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{span::Span, text_match::Match};

/// A maximal run of matches that follow each other without a gap in the
/// target, with the spans it covers in both documents.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stretch {
    pub source: Span,
    pub target: Span,
}

impl Stretch {
    fn between(first: &Match, last: &Match) -> Self {
        Self {
            source: Span::new(first.source, last.source_end()),
            target: Span::new(first.target, last.target_end()),
        }
    }
}

/// Merge consecutive matches into stretches, breaking wherever a match does
/// not start right where the previous one ended in the target. Matches
/// separated only by inserted source text belong to the same stretch.
#[must_use]
pub fn stretches(matches: &[Match]) -> Vec<Stretch> {
    let mut result = Vec::new();
    let Some((first, rest)) = matches.split_first() else {
        return result;
    };

    let mut stretch_start = first;
    let mut previous = first;
    for text_match in rest {
        if previous.target_end() != text_match.target {
            result.push(Stretch::between(stretch_start, previous));
            stretch_start = text_match;
        }
        previous = text_match;
    }
    result.push(Stretch::between(stretch_start, previous));

    result
}
