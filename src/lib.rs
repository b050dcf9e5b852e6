//! Weave the annotations of a document into an augmented revision of it.
//!
//! The *source* document is a revision of the *target* document with extra
//! text inserted here and there. Given the blocks of text both documents
//! share, this crate works out how target positions map to source positions
//! and which annotations on either side have a counterpart on the other,
//! including dialogues and segments that an editor merged or split between
//! the two versions.

mod matching;
mod types;
mod utils;
mod weave;

pub use matching::{matching_blocks, weave_documents};
pub use types::{
    annotation::Annotation, annotation_kind::AnnotationKind, document::Document, span::Span,
    text_match::Match,
};
pub use utils::side::Side;
pub use weave::{
    Candidate, CheckMode, Gap, ShiftMap, Status, Stretch, UpdateReport, Updates, WeaveError,
    WeaveEvent, WeaveLog, WeaveOptions, check_matches, compute_structural_updates,
    compute_updates, find_merge, find_split, is_whitespace_gap, source_gaps, stretches,
    target_gaps, weave,
};
