//! Property-based tests for incremental styling and preview.
//!
//! Edits are drawn from a small markdown-heavy alphabet so that constructs
//! form and break often.

use markstyle::{MarkdownParser, MarkdownTextStorage, StylesConfiguration};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Text over an alphabet where most characters are markdown symbols.
fn markdown_strategy(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', ' ', ' ', '\n', '*', '*', '_', '~', '`', '#', '-', '[', ']', '(', ')', '!',
            '\u{e9}',
        ]),
        0..max_len,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// An edit as (start seed, removed length seed, inserted text).
fn edit_strategy() -> impl Strategy<Value = (usize, usize, String)> {
    (any::<usize>(), 0usize..4, markdown_strategy(6))
}

/// Snap an offset down to the previous char boundary.
fn floor_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

// ============================================================================
// Incremental styling
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any sequence of edits, the incrementally styled runs equal a
    /// fresh full styling of the final text.
    #[test]
    fn incremental_matches_full_restyle(
        initial in markdown_strategy(40),
        edits in prop::collection::vec(edit_strategy(), 1..12),
    ) {
        let mut storage = MarkdownTextStorage::with_text(&initial).unwrap();
        for (seed, removed, inserted) in edits {
            let text = storage.text();
            let start = floor_boundary(&text, seed % (text.len() + 1));
            let end = floor_boundary(&text, start + removed);
            storage.replace_characters(start..end, &inserted).unwrap();
        }

        let fresh = MarkdownTextStorage::with_text(&storage.text()).unwrap();
        prop_assert_eq!(storage.runs(), fresh.runs());
    }

    /// Runs always cover the text exactly and never repeat attributes.
    #[test]
    fn runs_cover_text(
        initial in markdown_strategy(40),
        edits in prop::collection::vec(edit_strategy(), 0..6),
    ) {
        let mut storage = MarkdownTextStorage::with_text(&initial).unwrap();
        for (seed, removed, inserted) in edits {
            let text = storage.text();
            let start = floor_boundary(&text, seed % (text.len() + 1));
            let end = floor_boundary(&text, start + removed);
            storage.replace_characters(start..end, &inserted).unwrap();
        }

        let runs: Vec<_> = storage.runs().iter().collect();
        prop_assert_eq!(storage.runs().len(), storage.len());
        let mut expected_start = 0;
        for run in &runs {
            prop_assert_eq!(run.range.start, expected_start);
            prop_assert!(!run.range.is_empty());
            expected_start = run.range.end;
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(&pair[0].attributes, &pair[1].attributes);
        }
    }

    /// Re-styling styled text changes nothing.
    #[test]
    fn restyle_is_idempotent(text in markdown_strategy(60)) {
        let mut storage = MarkdownTextStorage::with_text(&text).unwrap();
        let before = storage.runs().clone();
        storage.refresh().unwrap();
        prop_assert_eq!(storage.runs(), &before);

        let spans = storage.parser().styles(&text, 0..text.len()).unwrap();
        prop_assert_eq!(spans, storage.parser().styles(&text, 0..text.len()).unwrap());
    }
}

// ============================================================================
// Preview
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Replacements are in bounds, ascending and disjoint, and apply cleanly.
    #[test]
    fn preview_replacements_are_disjoint(text in markdown_strategy(60)) {
        let parser = MarkdownParser::with_default_elements(&StylesConfiguration::default());
        let ranges = parser.replacement_ranges(&text);
        for r in &ranges {
            prop_assert!(r.range.end <= text.len());
            prop_assert!(text.is_char_boundary(r.range.start));
            prop_assert!(text.is_char_boundary(r.range.end));
        }
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].range.end <= pair[1].range.start);
        }
        prop_assert!(parser.preview(&text).is_ok());
    }

    /// Text without markdown symbols previews unchanged.
    #[test]
    fn symbol_free_text_is_stable(text in "[a-z \\n\u{e9}]{0,60}") {
        let storage = MarkdownTextStorage::with_text(&text).unwrap();
        prop_assert!(storage.runs().iter().count() <= 1);
        prop_assert_eq!(storage.parser().preview(&text).unwrap(), text.clone());
        let preview = storage.attributed_string(true).unwrap();
        prop_assert_eq!(preview.as_str(), text.as_str());
    }
}
