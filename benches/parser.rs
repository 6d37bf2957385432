//! Recognizer and preview performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markstyle::{Edit, MarkdownParser, StylesConfiguration, rescan_range};
use std::hint::black_box;

const PARAGRAPH: &str = "# Notes\n- **bold** and _italic_ with `code`\n\
    See [the docs](https://example.com) or ~~not~~.\nplain line without markup\n";

fn document(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn parser_styles(c: &mut Criterion) {
    let parser = MarkdownParser::with_default_elements(&StylesConfiguration::default());
    let mut group = c.benchmark_group("styles");

    for paragraphs in [1, 100, 1_000] {
        let text = document(paragraphs);
        group.bench_with_input(BenchmarkId::new("full", paragraphs), &text, |b, text| {
            b.iter(|| parser.styles(black_box(text), 0..text.len()))
        });
    }

    let text = document(1_000);
    let mid = text.len() / 2;
    group.bench_function("rescan_one_edit_1000", |b| {
        b.iter(|| {
            let range = rescan_range(black_box(&text), &Edit::new(mid, 0, 1)).unwrap();
            parser.styles(&text, range)
        })
    });
    group.finish();
}

fn parser_preview(c: &mut Criterion) {
    let parser = MarkdownParser::with_default_elements(&StylesConfiguration::default());
    let text = document(100);

    c.bench_function("replacement_ranges_100", |b| {
        b.iter(|| parser.replacement_ranges(black_box(&text)))
    });

    c.bench_function("preview_100", |b| b.iter(|| parser.preview(black_box(&text))));

    c.bench_function("preview_nested", |b| {
        b.iter(|| parser.preview(black_box("**_~~`x`~~_** [**a**](b)")))
    });
}

criterion_group!(benches, parser_styles, parser_preview);
criterion_main!(benches);
