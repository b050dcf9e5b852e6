mod check_matches;
mod compute_updates;
mod shift;
mod stretch;
mod structural_updates;
mod updates;
mod weave_error;
mod weave_log;

pub use check_matches::{CheckMode, Gap, check_matches, source_gaps, target_gaps};
pub use compute_updates::compute_updates;
pub use shift::ShiftMap;
pub use stretch::{Stretch, stretches};
pub use structural_updates::{
    Candidate, compute_structural_updates, find_merge, find_split, is_whitespace_gap,
};
pub use updates::{Status, UpdateReport, Updates};
pub use weave_error::WeaveError;
pub use weave_log::{WeaveEvent, WeaveLog};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{document::Document, text_match::Match};

/// Settings for [`weave`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaveOptions {
    /// How to treat target text not covered by the matches.
    pub check_mode: CheckMode,

    /// Whether to look for merged and split structural annotations after
    /// the exact reconciliation.
    pub structural: bool,
}

impl Default for WeaveOptions {
    fn default() -> Self {
        Self {
            check_mode: CheckMode::Strict,
            structural: true,
        }
    }
}

/// Weave `target` into its augmented revision `source`.
///
/// `matches` are the blocks of text shared by both documents, as produced
/// by a sequence matcher such as [`crate::matching_blocks`]. They are first
/// checked to cover the whole target, then every annotation of both
/// documents is classified by whether it has a counterpart on the other
/// side. With [`WeaveOptions::structural`] set, dialogues and segments
/// that were merged or split between the two versions are paired up as
/// well.
///
/// ```
/// use weave_text::{Annotation, Document, Match, Span, WeaveLog, WeaveOptions, weave};
///
/// let target = Document::new("target", "Hi. Bye.")
///     .with_annotations(vec![Annotation::new("t1", Span::new(4, 8), "Segment")]);
/// let source = Document::new("source", "Hi. Well. Bye.")
///     .with_annotations(vec![Annotation::new("s1", Span::new(10, 14), "Segment")]);
/// let matches = [Match::new(0, 0, 4), Match::new(10, 4, 4)];
///
/// let updates = weave(&source, &target, &matches, WeaveOptions::default(), &mut WeaveLog::new())?;
/// assert!(updates.report().is_empty());
/// assert_eq!(updates.shift_span(Span::new(4, 8)), Span::new(10, 14));
/// # Ok::<(), weave_text::WeaveError>(())
/// ```
///
/// # Errors
///
/// Returns a [`WeaveError`] if the matches are inconsistent with the target
/// being a subsequence of the source.
pub fn weave<'a>(
    source: &'a Document,
    target: &'a Document,
    matches: &[Match],
    options: WeaveOptions,
    log: &mut WeaveLog,
) -> Result<Updates<'a>, WeaveError> {
    check_matches(target, matches, options.check_mode, log)?;

    let mut updates = compute_updates(source.annotations(), target.annotations(), matches);
    if options.structural {
        compute_structural_updates(source, target, matches, &mut updates, log);
    }

    Ok(updates)
}
