//! Fuzz target for incremental styling.
//!
//! Applies arbitrary edits and checks the result against a full restyle.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use markstyle::MarkdownTextStorage;

#[derive(Arbitrary, Debug)]
struct EditOp {
    start: u16,
    removed: u8,
    inserted: String,
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial: String,
    edits: Vec<EditOp>,
}

fn floor_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fuzz_target!(|input: Input| {
    let Ok(mut storage) = MarkdownTextStorage::with_text(&input.initial) else {
        return;
    };
    for op in input.edits.iter().take(32) {
        let text = storage.text();
        let start = floor_boundary(&text, usize::from(op.start));
        let end = floor_boundary(&text, start + usize::from(op.removed));
        storage
            .replace_characters(start..end, &op.inserted)
            .expect("built-in recognizers never fail to apply");
    }

    let fresh = MarkdownTextStorage::with_text(&storage.text()).expect("fresh styling");
    assert_eq!(storage.runs(), fresh.runs());
});
