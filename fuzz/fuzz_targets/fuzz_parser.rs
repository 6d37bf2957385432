//! Fuzz target for markdown recognition.
//!
//! Styles and preview replacements must stay in bounds, char-aligned and
//! (for replacements) disjoint for any input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use markstyle::{MarkdownParser, StylesConfiguration};

fuzz_target!(|data: &str| {
    let parser = MarkdownParser::with_default_elements(&StylesConfiguration::default());

    let spans = parser.styles(data, 0..data.len()).expect("full range is valid");
    for span in &spans {
        assert!(span.range.end <= data.len());
        assert!(data.is_char_boundary(span.range.start));
        assert!(data.is_char_boundary(span.range.end));
    }

    let ranges = parser.replacement_ranges(data);
    for pair in ranges.windows(2) {
        assert!(pair[0].range.end <= pair[1].range.start);
    }
    parser.preview(data).expect("replacements apply cleanly");
});
