use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    types::{document::Document, span::Span, text_match::Match},
    weave::{WeaveError, WeaveEvent, WeaveLog},
};

/// How to treat target text that no match covers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Gaps are fatal: the target must be rebuildable from matched blocks.
    #[default]
    Strict,

    /// Gaps are only reported. Small manual rewrites of the target can
    /// leave a few characters unmatched.
    Lenient,
}

/// A stretch of one document's text that no match covers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub offset: usize,
    pub length: usize,
}

impl Gap {
    #[must_use]
    pub fn span(&self) -> Span { Span::new(self.offset, self.offset + self.length) }
}

impl Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.offset, self.length)
    }
}

/// Spaces between the matches, as source offset and length. The target is
/// assumed to be a subsequence of the source, so this is where the source
/// inserted text. Text after the last match is not reported.
#[must_use]
pub fn source_gaps(matches: &[Match]) -> Vec<Gap> {
    gaps(matches.iter().map(|text_match| (text_match.source, text_match.length)))
}

/// Spaces between the matches, as target offset and length. This should be
/// empty for a proper augmented source, but rewrites do happen.
#[must_use]
pub fn target_gaps(matches: &[Match]) -> Vec<Gap> {
    gaps(matches.iter().map(|text_match| (text_match.target, text_match.length)))
}

fn gaps(blocks: impl Iterator<Item = (usize, usize)>) -> Vec<Gap> {
    let mut result = Vec::new();
    let mut last_end = 0;

    for (offset, length) in blocks {
        if offset != last_end {
            result.push(Gap {
                offset: last_end,
                length: offset.saturating_sub(last_end),
            });
        }
        last_end = offset + length;
    }

    result
}

/// Check that `matches` rebuild the whole `target` text, i.e. that the
/// target really is a subsequence of the source it was matched against.
///
/// Gaps in the target are errors in [`CheckMode::Strict`] and are
/// recorded as [`WeaveEvent::TargetGap`] in [`CheckMode::Lenient`].
///
/// # Errors
///
/// Returns a [`WeaveError`] naming the target document if the match list
/// is empty, does not start at the beginning of the target, leaves gaps
/// (strict mode), or stops before the end of the target.
pub fn check_matches(
    target: &Document,
    matches: &[Match],
    mode: CheckMode,
    log: &mut WeaveLog,
) -> Result<(), WeaveError> {
    if target.is_empty() {
        return Ok(());
    }

    let origin = target.origin().to_owned();
    let (Some(first), Some(last)) = (matches.first(), matches.last()) else {
        return Err(WeaveError::NoMatches { origin });
    };

    if first.target != 0 {
        return Err(WeaveError::MisalignedStart {
            origin,
            first: *first,
        });
    }

    let gaps = target_gaps(matches);
    if !gaps.is_empty() {
        if mode == CheckMode::Strict {
            return Err(WeaveError::TargetGaps { origin, gaps });
        }

        for gap in gaps {
            log.push(WeaveEvent::TargetGap {
                origin: origin.clone(),
                gap,
                text: target.text_in(gap.span()).to_owned(),
            });
        }
    }

    let length = target.len();
    if last.target_end() != length {
        return Err(WeaveError::IncompleteCoverage {
            origin,
            covered: last.target_end(),
            length,
        });
    }

    Ok(())
}
