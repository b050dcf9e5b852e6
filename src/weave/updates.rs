use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Side,
    types::{annotation::Annotation, span::Span},
    weave::{WeaveEvent, WeaveLog, shift::ShiftMap},
};

/// What is known about an annotation's counterpart in the other document.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// There is an annotation with the equivalent span on the other side
    Matched,

    /// A source annotation inside matched text without a target
    /// counterpart, which hints at a resegmentation or an alignment problem
    AbnormalSourceOnly,

    /// A target annotation without a source counterpart
    AbnormalTargetOnly,

    /// A source annotation on text that only the source has
    ExpectedSourceOnly,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Matched => write!(f, "matched"),
            Status::AbnormalSourceOnly => write!(f, "abnormal_src_only"),
            Status::AbnormalTargetOnly => write!(f, "abnormal_tgt_only"),
            Status::ExpectedSourceOnly => write!(f, "expected_src_only"),
        }
    }
}

/// The outcome of weaving a target document into its augmented source: how
/// to shift target positions, and the status of every annotation on both
/// sides.
///
/// Statuses are kept per position in each side's annotation collection, so
/// every annotation has exactly one of them. Unmatched statuses only ever
/// turn into [`Status::Matched`] once the reconciliation pass is done.
#[derive(Debug, Clone, PartialEq)]
pub struct Updates<'a> {
    shift_map: ShiftMap,
    source: &'a [Annotation],
    target: &'a [Annotation],
    source_statuses: Vec<Status>,
    target_statuses: Vec<Status>,
}

impl<'a> Updates<'a> {
    /// Every source annotation starts out as expected-source-only and every
    /// target annotation as abnormal-target-only, to be pruned as
    /// counterparts are found.
    pub(crate) fn new(source: &'a [Annotation], target: &'a [Annotation]) -> Self {
        Self {
            shift_map: ShiftMap::new(),
            source,
            target,
            source_statuses: vec![Status::ExpectedSourceOnly; source.len()],
            target_statuses: vec![Status::AbnormalTargetOnly; target.len()],
        }
    }

    #[must_use]
    pub fn shift_map(&self) -> &ShiftMap { &self.shift_map }

    pub(crate) fn shift_map_mut(&mut self) -> &mut ShiftMap { &mut self.shift_map }

    /// Translate a target position to the source.
    #[must_use]
    pub fn shift(&self, position: usize) -> usize { self.shift_map.shift(position) }

    /// Translate a target span to the source.
    #[must_use]
    pub fn shift_span(&self, span: Span) -> Span { self.shift_map.shift_span(span) }

    /// The span a target annotation would occupy in the source.
    #[must_use]
    pub fn shift_annotation_span(&self, annotation: &Annotation) -> Span {
        self.shift_span(annotation.span())
    }

    #[must_use]
    pub fn annotations(&self, side: Side) -> &'a [Annotation] {
        match side {
            Side::Source => self.source,
            Side::Target => self.target,
        }
    }

    fn statuses(&self, side: Side) -> &[Status] {
        match side {
            Side::Source => &self.source_statuses,
            Side::Target => &self.target_statuses,
        }
    }

    /// Status of the `index`-th annotation of `side`'s collection.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for that collection.
    #[must_use]
    pub fn status(&self, side: Side, index: usize) -> Status { self.statuses(side)[index] }

    pub(crate) fn set_status(&mut self, side: Side, index: usize, status: Status) {
        match side {
            Side::Source => self.source_statuses[index] = status,
            Side::Target => self.target_statuses[index] = status,
        }
    }

    #[must_use]
    pub fn is_matched(&self, side: Side, index: usize) -> bool {
        self.status(side, index) == Status::Matched
    }

    /// Mark an annotation as having a counterpart, recording the change.
    /// Returns false if it was already matched.
    pub(crate) fn clear(&mut self, side: Side, index: usize, log: &mut WeaveLog) -> bool {
        let from = self.status(side, index);
        if from == Status::Matched {
            return false;
        }

        self.set_status(side, index, Status::Matched);

        let annotation = &self.annotations(side)[index];
        log.push(WeaveEvent::Cleared {
            side,
            id: annotation.id().to_owned(),
            span: annotation.span(),
            from,
        });

        true
    }

    /// Indices of `side`'s annotations that have no counterpart yet.
    pub fn unmatched(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.statuses(side)
            .iter()
            .enumerate()
            .filter(|(_, status)| **status != Status::Matched)
            .map(|(index, _)| index)
    }

    fn with_status(&self, side: Side, status: Status) -> Vec<&'a Annotation> {
        let annotations = self.annotations(side);

        self.statuses(side)
            .iter()
            .zip(annotations)
            .filter(|(candidate, _)| **candidate == status)
            .map(|(_, annotation)| annotation)
            .collect()
    }

    /// Source annotations inside matched text lacking a target counterpart.
    #[must_use]
    pub fn abnormal_src_only(&self) -> Vec<&'a Annotation> {
        self.with_status(Side::Source, Status::AbnormalSourceOnly)
    }

    /// Target annotations lacking a source counterpart.
    #[must_use]
    pub fn abnormal_tgt_only(&self) -> Vec<&'a Annotation> {
        self.with_status(Side::Target, Status::AbnormalTargetOnly)
    }

    /// Source annotations on text inserted by the source.
    #[must_use]
    pub fn expected_src_only(&self) -> Vec<&'a Annotation> {
        self.with_status(Side::Source, Status::ExpectedSourceOnly)
    }

    #[must_use]
    pub fn report(&self) -> UpdateReport<&'a Annotation> {
        UpdateReport {
            abnormal_src_only: self.abnormal_src_only(),
            abnormal_tgt_only: self.abnormal_tgt_only(),
            expected_src_only: self.expected_src_only(),
        }
    }
}

/// The annotations needing attention after weaving, in collection order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateReport<T> {
    pub abnormal_src_only: Vec<T>,
    pub abnormal_tgt_only: Vec<T>,
    pub expected_src_only: Vec<T>,
}

impl<T> UpdateReport<T> {
    /// Apply `fun` to every annotation in the report, e.g. to preview it by
    /// identifier.
    #[must_use]
    pub fn map<U>(self, mut fun: impl FnMut(T) -> U) -> UpdateReport<U> {
        UpdateReport {
            abnormal_src_only: self.abnormal_src_only.into_iter().map(&mut fun).collect(),
            abnormal_tgt_only: self.abnormal_tgt_only.into_iter().map(&mut fun).collect(),
            expected_src_only: self.expected_src_only.into_iter().map(&mut fun).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abnormal_src_only.is_empty()
            && self.abnormal_tgt_only.is_empty()
            && self.expected_src_only.is_empty()
    }
}
