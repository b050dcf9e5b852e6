use crate::{
    types::{document::Document, text_match::Match},
    utils::myers_diff::myers_matching_blocks,
    weave::{Updates, WeaveError, WeaveLog, WeaveOptions, weave},
};

/// Blocks of text shared by `source` and `target`, in ascending order and
/// with offsets counted in characters.
///
/// When `target` is a subsequence of `source`, the blocks cover all of
/// `target` and the gaps between them are exactly the text `source`
/// inserted.
///
/// ```
/// use weave_text::{Match, matching_blocks};
///
/// assert_eq!(
///     matching_blocks("aXb", "ab"),
///     vec![Match::new(0, 0, 1), Match::new(2, 1, 1)]
/// );
/// ```
#[must_use]
pub fn matching_blocks(source: &str, target: &str) -> Vec<Match> {
    let source = source.chars().collect::<Vec<_>>();
    let target = target.chars().collect::<Vec<_>>();

    myers_matching_blocks(&source, &target)
}

/// Like [`weave`], but diffing the two documents' texts to find the
/// matches.
///
/// # Errors
///
/// Returns a [`WeaveError`] if `target`'s text is not a subsequence of
/// `source`'s (in strict mode), or is entirely unrelated to it.
pub fn weave_documents<'a>(
    source: &'a Document,
    target: &'a Document,
    options: WeaveOptions,
    log: &mut WeaveLog,
) -> Result<Updates<'a>, WeaveError> {
    let matches = matching_blocks(source.text(), target.text());
    log::trace!(
        "Found {} matching blocks between <{}> and <{}>",
        matches.len(),
        source.origin(),
        target.origin()
    );

    weave(source, target, &matches, options, log)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        types::{annotation::Annotation, span::Span},
        weave::CheckMode,
    };

    #[test]
    fn test_multibyte_offsets_are_characters() {
        assert_eq!(
            matching_blocks("día bueno", "día"),
            vec![Match::new(0, 0, 3)]
        );
        assert_eq!(
            matching_blocks("¡hola!", "hola"),
            vec![Match::new(1, 0, 4)]
        );
    }

    #[test]
    fn test_weave_documents() {
        let target = Document::new("target", "I have wood. Want it?").with_annotations(vec![
            Annotation::new("t1", Span::new(0, 12), "Segment"),
            Annotation::new("t2", Span::new(13, 21), "Segment"),
        ]);
        let source = Document::new("source", "I have wood. [sheep] Want it?")
            .with_annotations(vec![
                Annotation::new("s1", Span::new(0, 12), "Segment"),
                Annotation::new("s2", Span::new(13, 20), "Resource"),
                Annotation::new("s3", Span::new(21, 29), "Segment"),
            ]);

        let updates =
            weave_documents(&source, &target, WeaveOptions::default(), &mut WeaveLog::new())
                .unwrap();
        let report = updates.report().map(|annotation| annotation.id().to_owned());

        assert_eq!(report.expected_src_only, vec!["s2"]);
        assert!(report.abnormal_src_only.is_empty());
        assert!(report.abnormal_tgt_only.is_empty());
    }

    #[test]
    fn test_unrelated_target_fails() {
        let target = Document::new("target", "xyz");
        let source = Document::new("source", "abc");

        let result = weave_documents(
            &source,
            &target,
            WeaveOptions {
                check_mode: CheckMode::Lenient,
                structural: true,
            },
            &mut WeaveLog::new(),
        );

        assert_eq!(
            result.unwrap_err(),
            WeaveError::NoMatches {
                origin: "target".to_owned()
            }
        );
    }
}
