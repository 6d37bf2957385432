//! Orchestrates recognizers over a text.

use std::cmp::Reverse;
use std::ops::Range;

use super::element::MarkdownElement;
use super::elements::default_elements;
use super::span::{ReplacementRange, StyleSpan};
use crate::config::StylesConfiguration;
use crate::error::{Error, Result, check_range};

/// Preview values are stripped recursively at most this deep.
const MAX_PREVIEW_NESTING: usize = 8;

/// Ordered set of recognizers.
///
/// Order only matters when two recognizers substitute fonts over the same
/// characters; font traits compose in any order.
#[derive(Debug, Default)]
pub struct MarkdownParser {
    elements: Vec<Box<dyn MarkdownElement>>,
}

impl MarkdownParser {
    #[must_use]
    pub fn new(elements: Vec<Box<dyn MarkdownElement>>) -> Self {
        Self { elements }
    }

    /// Parser with every built-in recognizer.
    #[must_use]
    pub fn with_default_elements(config: &StylesConfiguration) -> Self {
        Self::new(default_elements(config))
    }

    /// Append a recognizer; it runs after the existing ones.
    pub fn register(&mut self, element: Box<dyn MarkdownElement>) {
        self.elements.push(element);
    }

    /// The recognizers, in evaluation order.
    #[must_use]
    pub fn elements(&self) -> &[Box<dyn MarkdownElement>] {
        &self.elements
    }

    /// Find a recognizer by name (case-insensitive).
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&dyn MarkdownElement> {
        self.elements
            .iter()
            .find(|element| element.name().eq_ignore_ascii_case(name))
            .map(AsRef::as_ref)
    }

    /// Same recognizers, rebuilt for `config`.
    #[must_use]
    pub fn applying(&self, config: &StylesConfiguration) -> Self {
        Self::new(
            self.elements
                .iter()
                .map(|element| element.applying(config))
                .collect(),
        )
    }

    /// Style spans of every recognizer over `range`, in recognizer order.
    ///
    /// Spans must be applied in the order returned; font-trait spans union
    /// into whatever font is in place (see [`apply_styles`]).
    ///
    /// [`apply_styles`]: super::apply_styles
    pub fn styles(&self, text: &str, range: Range<usize>) -> Result<Vec<StyleSpan>> {
        check_range(text, &range)?;
        Ok(self
            .elements
            .iter()
            .flat_map(|element| element.scan(text, range.clone()))
            .collect())
    }

    /// Disjoint preview replacements over the whole text, ascending.
    ///
    /// When constructs nest, the outermost wins and its replacement value is
    /// itself stripped, so `**_x_**` becomes `x`. Apply the result with
    /// [`apply_replacements`], which works back to front.
    #[must_use]
    pub fn replacement_ranges(&self, text: &str) -> Vec<ReplacementRange> {
        self.replacement_ranges_nested(text, 0)
    }

    /// Like [`replacement_ranges`](Self::replacement_ranges) but without
    /// stripping inside the accepted values: each value is the raw content of
    /// its construct.
    #[must_use]
    pub fn outermost_replacement_ranges(&self, text: &str) -> Vec<ReplacementRange> {
        self.replacement_ranges_nested(text, MAX_PREVIEW_NESTING)
    }

    /// `text` with every markdown construct replaced by its preview value.
    pub fn preview(&self, text: &str) -> Result<String> {
        apply_replacements(text, &self.replacement_ranges(text))
    }

    fn replacement_ranges_nested(&self, text: &str, depth: usize) -> Vec<ReplacementRange> {
        let mut all: Vec<ReplacementRange> = self
            .elements
            .iter()
            .flat_map(|element| element.replacement_ranges(text))
            .filter(|r| !r.range.is_empty())
            .collect();
        all.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(b.range.end.cmp(&a.range.end))
        });

        let mut kept: Vec<ReplacementRange> = Vec::with_capacity(all.len());
        for replacement in all {
            if kept
                .last()
                .is_some_and(|last| last.range.end > replacement.range.start)
            {
                continue;
            }
            kept.push(replacement);
        }

        if depth < MAX_PREVIEW_NESTING {
            for replacement in &mut kept {
                let inner = self.replacement_ranges_nested(&replacement.replacement, depth + 1);
                if inner.is_empty() {
                    continue;
                }
                if let Ok(stripped) = apply_replacements(&replacement.replacement, &inner) {
                    replacement.replacement = stripped;
                }
            }
        }
        kept
    }
}

/// Apply `ranges` to `text` in descending start order.
///
/// Working back to front keeps every not-yet-applied range valid: a
/// replacement only shifts the bytes after it. Ranges must be in bounds,
/// char-aligned and pairwise disjoint.
pub fn apply_replacements(text: &str, ranges: &[ReplacementRange]) -> Result<String> {
    let mut ordered: Vec<&ReplacementRange> = ranges.iter().collect();
    ordered.sort_by_key(|r| Reverse(r.range.start));

    for replacement in &ordered {
        check_range(text, &replacement.range)?;
    }
    for pair in ordered.windows(2) {
        let (later, earlier) = (pair[0], pair[1]);
        if earlier.overlaps(later) || earlier.range.start == later.range.start {
            return Err(Error::OverlappingReplacements {
                first: earlier.range.clone(),
                second: later.range.clone(),
            });
        }
    }

    let mut out = text.to_string();
    for replacement in ordered {
        out.replace_range(replacement.range.clone(), &replacement.replacement);
    }
    Ok(out)
}
