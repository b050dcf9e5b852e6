use crate::{
    Side,
    types::{annotation::Annotation, span::Span, text_match::Match},
    weave::updates::{Status, Updates},
};

/// Indices of the annotations lying entirely within `span`.
pub(crate) fn enclosed(span: Span, annotations: &[Annotation]) -> Vec<usize> {
    annotations
        .iter()
        .enumerate()
        .filter(|(_, annotation)| span.encloses(&annotation.span()))
        .map(|(index, _)| index)
        .collect()
}

/// Classify every annotation of `source` and `target` by whether it has a
/// counterpart with the exact same span on the other side.
///
/// Only annotations within a single match are compared. Target spans are
/// moved into source coordinates by the match's offset; a source annotation
/// matches every target annotation that lands on its span. Source
/// annotations outside of all matches sit on inserted text and are expected
/// to be source-only.
#[must_use]
pub fn compute_updates<'a>(
    source: &'a [Annotation],
    target: &'a [Annotation],
    matches: &[Match],
) -> Updates<'a> {
    let mut updates = Updates::new(source, target);

    for text_match in matches {
        let offset = updates.shift_map_mut().record(text_match);

        let source_indices = enclosed(text_match.source_span(), source);
        let target_indices = enclosed(text_match.target_span(), target);
        let target_spans = target_indices
            .iter()
            .map(|index| target[*index].span().shift(offset))
            .collect::<Vec<_>>();

        for source_index in source_indices {
            let source_span = source[source_index].span();
            let equivalents = target_indices
                .iter()
                .zip(&target_spans)
                .filter(|(_, target_span)| **target_span == source_span)
                .map(|(target_index, _)| *target_index)
                .collect::<Vec<_>>();

            // An empty span at a block boundary is enclosed by two blocks,
            // don't let the second one undo a match found in the first.
            if !updates.is_matched(Side::Source, source_index) {
                let status = if equivalents.is_empty() {
                    Status::AbnormalSourceOnly
                } else {
                    Status::Matched
                };
                updates.set_status(Side::Source, source_index, status);
            }

            for target_index in equivalents {
                updates.set_status(Side::Target, target_index, Status::Matched);
            }
        }
    }

    updates
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(annotations: &[&Annotation]) -> Vec<String> {
        annotations
            .iter()
            .map(|annotation| annotation.id().to_owned())
            .collect()
    }

    fn matches_of(matches: &[(usize, usize, usize)]) -> Vec<Match> {
        matches.iter().copied().map(Match::from).collect()
    }

    #[test]
    fn test_exact_counterparts_are_matched() {
        // target "hello world", source "hello big world"
        let source = vec![
            Annotation::new("s1", Span::new(0, 5), "Segment"),
            Annotation::new("s2", Span::new(10, 15), "Segment"),
        ];
        let target = vec![
            Annotation::new("t1", Span::new(0, 5), "Segment"),
            Annotation::new("t2", Span::new(6, 11), "Segment"),
        ];

        let updates = compute_updates(&source, &target, &matches_of(&[(0, 0, 6), (10, 6, 5)]));

        assert!(updates.report().is_empty());
        assert_eq!(updates.shift(6), 10);
        assert_eq!(updates.shift_annotation_span(&target[1]), Span::new(10, 15));
    }

    #[test]
    fn test_target_without_counterpart_is_abnormal() {
        let source: Vec<Annotation> = vec![];
        let target = vec![Annotation::new("t1", Span::new(0, 2), "Segment")];

        let updates = compute_updates(&source, &target, &matches_of(&[(0, 0, 1), (2, 1, 1)]));

        assert_eq!(ids(&updates.abnormal_tgt_only()), vec!["t1"]);
        assert!(updates.abnormal_src_only().is_empty());
        assert!(updates.expected_src_only().is_empty());
    }

    #[test]
    fn test_source_annotation_on_inserted_text_is_expected() {
        // target "ab", source "aXYb"
        let source = vec![
            Annotation::new("inserted", Span::new(1, 3), "Segment"),
            Annotation::new("straddling", Span::new(0, 3), "Segment"),
        ];

        let updates = compute_updates(&source, &[], &matches_of(&[(0, 0, 1), (3, 1, 1)]));

        assert_eq!(ids(&updates.expected_src_only()), vec!["inserted", "straddling"]);
        assert!(updates.abnormal_src_only().is_empty());
    }

    #[test]
    fn test_source_annotation_inside_match_without_counterpart_is_abnormal() {
        let source = vec![
            Annotation::new("s1", Span::new(0, 3), "Segment"),
            Annotation::new("s2", Span::new(3, 6), "Segment"),
        ];
        let target = vec![Annotation::new("t1", Span::new(0, 6), "Segment")];

        let updates = compute_updates(&source, &target, &matches_of(&[(0, 0, 6)]));

        assert_eq!(ids(&updates.abnormal_src_only()), vec!["s1", "s2"]);
        assert_eq!(ids(&updates.abnormal_tgt_only()), vec!["t1"]);
        assert!(updates.expected_src_only().is_empty());
    }

    #[test]
    fn test_one_source_matches_every_equivalent_target() {
        let source = vec![Annotation::new("s1", Span::new(2, 4), "Segment")];
        let target = vec![
            Annotation::new("t1", Span::new(0, 2), "Segment"),
            Annotation::new("t2", Span::new(0, 2), "Dialogue"),
        ];

        let updates = compute_updates(&source, &target, &matches_of(&[(2, 0, 3)]));

        assert!(updates.report().is_empty());
    }

    #[test]
    fn test_every_annotation_has_one_status() {
        let source = vec![
            Annotation::new("s1", Span::new(0, 2), "Segment"),
            Annotation::new("s2", Span::new(2, 4), "Segment"),
            Annotation::new("s3", Span::new(4, 6), "Segment"),
        ];
        let target = vec![
            Annotation::new("t1", Span::new(0, 2), "Segment"),
            Annotation::new("t2", Span::new(2, 3), "Segment"),
        ];

        let updates = compute_updates(&source, &target, &matches_of(&[(0, 0, 2), (4, 2, 2)]));
        let report = updates.report();

        let listed = report.abnormal_src_only.len()
            + report.abnormal_tgt_only.len()
            + report.expected_src_only.len();
        let matched = updates.annotations(Side::Source).len()
            + updates.annotations(Side::Target).len()
            - updates.unmatched(Side::Source).count()
            - updates.unmatched(Side::Target).count();
        assert_eq!(listed + matched, source.len() + target.len());
        assert_eq!(ids(&report.expected_src_only), vec!["s2"]);
        assert_eq!(ids(&report.abnormal_src_only), vec!["s3"]);
        assert_eq!(ids(&report.abnormal_tgt_only), vec!["t2"]);
    }

    #[test]
    fn test_shorter_rewrite_in_target_still_reconciles() {
        // target "a&not;b", source "a^b"
        let source = vec![
            Annotation::new("s1", Span::new(0, 1), "Segment"),
            Annotation::new("s2", Span::new(2, 3), "Segment"),
        ];
        let target = vec![
            Annotation::new("t1", Span::new(0, 1), "Segment"),
            Annotation::new("t2", Span::new(6, 7), "Segment"),
        ];

        let updates = compute_updates(&source, &target, &matches_of(&[(0, 0, 1), (2, 6, 1)]));

        assert!(updates.report().is_empty());
        assert_eq!(updates.shift_annotation_span(&target[1]), Span::new(2, 3));
    }

    #[test]
    fn test_reconciling_twice_gives_the_same_result() {
        let source = vec![
            Annotation::new("s1", Span::new(0, 2), "Segment"),
            Annotation::new("s2", Span::new(3, 5), "Dialogue"),
        ];
        let target = vec![Annotation::new("t1", Span::new(2, 4), "Dialogue")];
        let matches = matches_of(&[(0, 0, 2), (3, 2, 2)]);

        let first = compute_updates(&source, &target, &matches);
        let second = compute_updates(&source, &target, &matches);

        assert_eq!(first, second);
    }
}
