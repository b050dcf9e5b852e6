use crate::{
    Side,
    types::{annotation_kind::AnnotationKind, document::Document, span::Span, text_match::Match},
    weave::{
        WeaveEvent, WeaveLog,
        stretch::{Stretch, stretches},
        updates::Updates,
    },
};

/// Kinds of unmatched source and target annotations that may correspond
/// structurally, tried in this order.
const STRUCTURAL_PAIRS: [(AnnotationKind, AnnotationKind); 3] = [
    (AnnotationKind::Dialogue, AnnotationKind::Dialogue),
    (AnnotationKind::Segment, AnnotationKind::Segment),
    (AnnotationKind::Segment, AnnotationKind::DialogueAct),
];

/// An annotation taking part in the structural pass.
///
/// `span` is where the annotation lies in source coordinates, which is what
/// gets compared. `text_span` is where it lies in its own document, which
/// is where the text between candidates is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub span: Span,
    pub text_span: Span,
}

/// Find the candidates that tile `span` exactly: they all lie within it,
/// the first starts where it starts, the last ends where it ends, and only
/// whitespace separates neighbours in `document`'s text.
///
/// `candidates` must be sorted by `span`. Returns the indices of the tiling
/// candidates in order.
fn find_tiling(span: Span, candidates: &[Candidate], document: &Document) -> Option<Vec<usize>> {
    let sequence = candidates
        .iter()
        .filter(|candidate| span.encloses(&candidate.span))
        .copied()
        .collect::<Vec<_>>();

    let (first, last) = (sequence.first()?, sequence.last()?);
    if first.span.start != span.start || last.span.end != span.end {
        return None;
    }

    if !is_whitespace_gap(&sequence, document) {
        return None;
    }

    Some(sequence.iter().map(|candidate| candidate.index).collect())
}

/// True if the text between consecutive candidates of `sequence` is blank.
/// Overlapping neighbours have no text between them.
#[must_use]
pub fn is_whitespace_gap(sequence: &[Candidate], document: &Document) -> bool {
    sequence.windows(2).all(|pair| {
        let (current, next) = (pair[0].text_span, pair[1].text_span);
        next.start <= current.end
            || document
                .text_in(Span::new(current.end, next.start))
                .trim()
                .is_empty()
    })
}

/// Source annotations that together cover the target annotation at
/// `target_span` (already shifted into source coordinates), meaning the
/// target annotation results from merging them. `source_candidates` must be
/// sorted by span.
#[must_use]
pub fn find_merge(
    target_span: Span,
    source_candidates: &[Candidate],
    source: &Document,
) -> Option<Vec<usize>> {
    find_tiling(target_span, source_candidates, source)
}

/// Target annotations (with spans shifted into source coordinates) that
/// together cover the source annotation at `source_span`, meaning they
/// result from splitting it. `target_candidates` must be sorted by span.
#[must_use]
pub fn find_split(
    source_span: Span,
    target_candidates: &[Candidate],
    target: &Document,
) -> Option<Vec<usize>> {
    find_tiling(source_span, target_candidates, target)
}

fn clear_all(updates: &mut Updates<'_>, side: Side, indices: &[usize], log: &mut WeaveLog) {
    for index in indices {
        updates.clear(side, *index, log);
    }
}

fn id(updates: &Updates<'_>, side: Side, index: usize) -> String {
    updates.annotations(side)[index].id().to_owned()
}

fn ids(updates: &Updates<'_>, side: Side, indices: &[usize]) -> Vec<String> {
    indices.iter().map(|index| id(updates, side, *index)).collect()
}

/// Match the annotations of two pools within one stretch: one-to-one and
/// merges first, then splits.
///
/// Target candidates are the pool's still unmatched annotations. Source
/// candidates are the whole pool, since a source annotation matched through
/// one target kind may still be the counterpart of annotations of another
/// kind. A merge or split is only reported when it has at least two parts;
/// a single part is an exact match.
fn stretch_match(
    updates: &mut Updates<'_>,
    documents: (&Document, &Document),
    stretch: Stretch,
    pools: (&[usize], &[usize]),
    log: &mut WeaveLog,
) {
    let (source, target) = documents;
    let (source_pool, target_pool) = pools;

    let mut source_candidates = source_pool
        .iter()
        .map(|index| {
            let span = updates.annotations(Side::Source)[*index].span();
            Candidate {
                index: *index,
                span,
                text_span: span,
            }
        })
        .filter(|candidate| stretch.source.encloses(&candidate.span))
        .collect::<Vec<_>>();
    source_candidates.sort_by_key(|candidate| (candidate.span, candidate.index));

    let mut target_candidates = target_pool
        .iter()
        .filter(|index| !updates.is_matched(Side::Target, **index))
        .map(|index| {
            let text_span = updates.annotations(Side::Target)[*index].span();
            Candidate {
                index: *index,
                span: updates.shift_span(text_span),
                text_span,
            }
        })
        .filter(|candidate| stretch.target.encloses(&candidate.text_span))
        .collect::<Vec<_>>();
    target_candidates.sort_by_key(|candidate| (candidate.span, candidate.index));

    for target_candidate in &target_candidates {
        let equivalents = source_candidates
            .iter()
            .filter(|candidate| candidate.span == target_candidate.span)
            .map(|candidate| candidate.index)
            .collect::<Vec<_>>();

        if !equivalents.is_empty() {
            updates.clear(Side::Target, target_candidate.index, log);
            clear_all(updates, Side::Source, &equivalents, log);
            continue;
        }

        if let Some(merged) = find_merge(target_candidate.span, &source_candidates, source) {
            log.push(WeaveEvent::Merge {
                target: id(updates, Side::Target, target_candidate.index),
                sources: ids(updates, Side::Source, &merged),
            });
            updates.clear(Side::Target, target_candidate.index, log);
            clear_all(updates, Side::Source, &merged, log);
        }
    }

    for source_candidate in &source_candidates {
        let Some(split) = find_split(source_candidate.span, &target_candidates, target) else {
            continue;
        };
        if split.len() < 2 {
            continue;
        }

        log.push(WeaveEvent::Split {
            source: id(updates, Side::Source, source_candidate.index),
            targets: ids(updates, Side::Target, &split),
        });
        updates.clear(Side::Source, source_candidate.index, log);
        clear_all(updates, Side::Target, &split, log);
    }
}

fn pool(updates: &Updates<'_>, side: Side, kind: AnnotationKind) -> Vec<usize> {
    let annotations = updates.annotations(side);
    updates
        .unmatched(side)
        .filter(|index| annotations[*index].kind() == kind)
        .collect()
}

/// Second pass over structural annotations (dialogues, segments and
/// discourse act units) left unmatched by
/// [`compute_updates`](crate::compute_updates).
///
/// Within each stretch of target-contiguous matches, annotations are paired
/// up when their spans agree exactly, or when a run of annotations on one
/// side covers a single annotation on the other side with nothing but
/// whitespace in between. The latter are the traces of merges and splits
/// made by an editor. Many-to-many correspondences are not looked for;
/// whatever stays unmatched keeps its status.
///
/// `source` and `target` must be the documents whose annotations `updates`
/// was computed from.
pub fn compute_structural_updates(
    source: &Document,
    target: &Document,
    matches: &[Match],
    updates: &mut Updates<'_>,
    log: &mut WeaveLog,
) {
    let initial: &Updates<'_> = updates;
    let pools = STRUCTURAL_PAIRS
        .iter()
        .map(|(source_kind, target_kind)| {
            (
                pool(initial, Side::Source, *source_kind),
                pool(initial, Side::Target, *target_kind),
            )
        })
        .collect::<Vec<_>>();

    for stretch in stretches(matches) {
        for (source_pool, target_pool) in &pools {
            stretch_match(
                updates,
                (source, target),
                stretch,
                (source_pool.as_slice(), target_pool.as_slice()),
                log,
            );
        }
    }
}
