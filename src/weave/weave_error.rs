use thiserror::Error;

use crate::{types::text_match::Match, weave::check_matches::Gap};

/// The match list is inconsistent with the target being a subsequence of
/// the source. Any of these aborts weaving for the document pair.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeaveError {
    /// The target has text but nothing in it was matched
    #[error("No matches in non-empty target document <{origin}>")]
    NoMatches {
        /// Origin of the target document
        origin: String,
    },

    /// The first match leaves the beginning of the target uncovered
    #[error("Matches ({first}) do not start at beginning of target document <{origin}>")]
    MisalignedStart {
        /// Origin of the target document
        origin: String,
        /// The first match of the list
        first: Match,
    },

    /// Some target text between matches is not covered (strict mode only)
    #[error("There are match gaps in the target document <{origin}>: {gaps:?}")]
    TargetGaps {
        /// Origin of the target document
        origin: String,
        /// The uncovered stretches of target text
        gaps: Vec<Gap>,
    },

    /// The last match ends before the end of the target
    #[error(
        "Matches do not cover the full target document <{origin}>: coverage ends at {covered} \
         but the text has {length} characters"
    )]
    IncompleteCoverage {
        /// Origin of the target document
        origin: String,
        /// Target offset where the last match ends
        covered: usize,
        /// Length of the target text in characters
        length: usize,
    },
}
