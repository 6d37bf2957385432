//! Storage editing performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use markstyle::{AttributeRuns, Attributes, Font, MarkdownTextStorage, Rgba};
use std::hint::black_box;

const PARAGRAPH: &str = "## Section\n- item with **bold** text\nplain `code` and _emphasis_\n";

fn storage_creation(c: &mut Criterion) {
    let text = PARAGRAPH.repeat(500);
    c.bench_function("storage_with_text_500", |b| {
        b.iter(|| MarkdownTextStorage::with_text(black_box(&text)))
    });
}

fn storage_typing(c: &mut Criterion) {
    let text = PARAGRAPH.repeat(500);
    let storage = MarkdownTextStorage::with_text(&text).unwrap();
    let mid = text.len() / 2;

    c.bench_function("storage_type_char_mid", |b| {
        b.iter_batched(
            || MarkdownTextStorage::with_text(&text).unwrap(),
            |mut storage| storage.replace_characters(mid..mid, black_box("x")),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("storage_type_newline_mid", |b| {
        b.iter_batched(
            || MarkdownTextStorage::with_text(&text).unwrap(),
            |mut storage| storage.replace_characters(mid..mid, black_box("\n")),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("storage_attributed_string", |b| {
        b.iter(|| black_box(&storage).attributed_string(true))
    });
}

fn runs_ops(c: &mut Criterion) {
    let attrs = Attributes::new(Font::system(14.0), Rgba::BLACK);
    let red = Attributes::new(Font::system(14.0), Rgba::RED);

    c.bench_function("runs_set_1000", |b| {
        b.iter(|| {
            let mut runs = AttributeRuns::new(10_000, attrs.clone());
            for i in 0..1_000 {
                runs.set(i * 10..i * 10 + 5, &red);
            }
            runs
        })
    });
}

criterion_group!(benches, storage_creation, storage_typing, runs_ops);
criterion_main!(benches);
