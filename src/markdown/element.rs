//! Recognizer trait and the line scanning it is built on.

use std::fmt;
use std::ops::Range;

use super::span::{ReplacementRange, StyleSpan};
use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::style::AttributeValue;

/// One occurrence of a markdown construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementMatch {
    /// The whole construct, symbols included.
    pub range: Range<usize>,
    /// Markdown punctuation, in text order.
    pub symbols: Vec<Range<usize>>,
    /// The text the construct decorates.
    pub content: Range<usize>,
    /// Secondary payload, e.g. a link target.
    pub target: Option<Range<usize>>,
}

impl ElementMatch {
    #[must_use]
    pub fn new(range: Range<usize>, symbols: Vec<Range<usize>>, content: Range<usize>) -> Self {
        Self {
            range,
            symbols,
            content,
            target: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Range<usize>) -> Self {
        self.target = Some(target);
        self
    }

    /// Shift every range by `by` bytes (line-relative to text-relative).
    #[must_use]
    pub fn offset(mut self, by: usize) -> Self {
        let shift = |r: &Range<usize>| r.start + by..r.end + by;
        self.range = shift(&self.range);
        self.content = shift(&self.content);
        self.target = self.target.as_ref().map(shift);
        for symbol in &mut self.symbols {
            *symbol = shift(symbol);
        }
        self
    }

    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && range.start < self.range.end
    }
}

/// A recognizer for one markdown construct.
///
/// Implementors only describe where their construct sits in a single line
/// and how its content is styled; scanning a range, symbol tinting and
/// preview replacements come from the provided methods. Every parameter a
/// recognizer needs is derived from a [`StylesConfiguration`] when it is
/// built, and [`applying`](Self::applying) rebuilds it for a new one.
pub trait MarkdownElement: Send + Sync + fmt::Debug {
    /// Human-readable name of this recognizer.
    fn name(&self) -> &'static str;

    /// Color used to de-emphasize the markdown symbols.
    fn symbols_color(&self) -> Rgba;

    /// Find every occurrence in one line (without its terminator).
    /// Returned offsets are relative to the start of `line`.
    fn find_in_line(&self, line: &str) -> Vec<ElementMatch>;

    /// Spans carrying the semantic effect over `found.content`. Only called
    /// for non-empty content; offsets in `found` are text-relative.
    fn content_styles(&self, text: &str, found: &ElementMatch) -> Vec<StyleSpan>;

    /// Rebuild this recognizer for another configuration.
    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement>;

    /// What a symbol-free preview shows instead of `found`.
    fn replacement(&self, text: &str, found: &ElementMatch) -> ReplacementRange {
        ReplacementRange::new(found.range.clone(), &text[found.content.clone()])
    }

    /// Occurrences in every line touched by `range` that overlap it.
    fn matches(&self, text: &str, range: Range<usize>) -> Vec<ElementMatch> {
        let mut found = Vec::new();
        for (line_start, line) in lines_in(text, range.clone()) {
            found.extend(
                self.find_in_line(line)
                    .into_iter()
                    .map(|m| m.offset(line_start))
                    .filter(|m| m.overlaps(&range)),
            );
        }
        found
    }

    /// Style spans for every occurrence overlapping `range`.
    ///
    /// Matches are never required to lie fully inside `range`; a construct
    /// straddling its boundary is styled as a whole.
    fn scan(&self, text: &str, range: Range<usize>) -> Vec<StyleSpan> {
        let color = AttributeValue::ForegroundColor(self.symbols_color());
        let mut spans = Vec::new();
        for found in self.matches(text, range) {
            spans.extend(
                found
                    .symbols
                    .iter()
                    .filter(|symbol| !symbol.is_empty())
                    .map(|symbol| StyleSpan::new(symbol.clone(), color.clone())),
            );
            if !found.content.is_empty() {
                spans.extend(self.content_styles(text, &found));
            }
        }
        spans
    }

    /// Preview replacements for every occurrence in `text`.
    fn replacement_ranges(&self, text: &str) -> Vec<ReplacementRange> {
        self.matches(text, 0..text.len())
            .iter()
            .map(|found| self.replacement(text, found))
            .collect()
    }
}

/// Byte offset of the start of the line containing `offset`.
pub(crate) fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map_or(0, |idx| idx + 1)
}

/// Lines touched by `range` as `(line_start, line)`; `line` excludes its
/// `\n` or `\r\n` terminator. An empty range touches no line.
pub(crate) fn lines_in(text: &str, range: Range<usize>) -> impl Iterator<Item = (usize, &str)> {
    let mut next = (!range.is_empty()).then(|| line_start(text, range.start));
    std::iter::from_fn(move || {
        let start = next.filter(|&start| start < range.end)?;
        let end = match text[start..].find('\n') {
            Some(idx) => {
                next = Some(start + idx + 1);
                start + idx
            }
            None => {
                next = None;
                text.len()
            }
        };
        let line = &text[start..end];
        Some((start, line.strip_suffix('\r').unwrap_or(line)))
    })
}

/// Matching rules for a symmetric delimiter pair such as `**` or `_`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Delimiter {
    pub token: &'static str,
    /// Delimiters may sit inside a word (`a**b**c`).
    pub intraword: bool,
    /// Delimiters inside inline code spans are ignored.
    pub skip_code: bool,
}

impl Delimiter {
    pub const fn new(token: &'static str) -> Self {
        Self {
            token,
            intraword: true,
            skip_code: true,
        }
    }

    pub const fn word_bounded(mut self) -> Self {
        self.intraword = false;
        self
    }

    pub const fn inside_code(mut self) -> Self {
        self.skip_code = false;
        self
    }

    /// Find `token content token` pairs. An opener without a closer yields
    /// nothing; empty content between the pair still matches.
    pub fn find(self, line: &str) -> Vec<ElementMatch> {
        let bytes = line.as_bytes();
        let token = self.token.as_bytes();
        let width = token.len();
        let code = if self.skip_code {
            code_spans(line)
        } else {
            Vec::new()
        };

        let is_token = |idx: usize| {
            bytes[idx..].starts_with(token) && !is_escaped(bytes, idx) && !in_ranges(idx, &code)
        };
        let opens = |idx: usize| is_token(idx) && (self.intraword || !word_before(line, idx));
        let closes =
            |idx: usize| is_token(idx) && (self.intraword || !word_after(line, idx + width));

        let mut found = Vec::new();
        let mut i = 0usize;
        while i + width <= bytes.len() {
            if opens(i) {
                let close = (i + width..=bytes.len() - width).find(|&j| closes(j));
                if let Some(j) = close {
                    found.push(ElementMatch::new(
                        i..j + width,
                        vec![i..i + width, j..j + width],
                        i + width..j,
                    ));
                    i = j + width;
                    continue;
                }
            }
            i += 1;
        }
        found
    }
}

/// Inline code spans of a line; other recognizers ignore symbols inside.
pub(crate) fn code_spans(line: &str) -> Vec<Range<usize>> {
    Delimiter::new("`")
        .inside_code()
        .find(line)
        .into_iter()
        .map(|m| m.range)
        .collect()
}

pub(crate) fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    idx > 0 && bytes[idx - 1] == b'\\'
}

pub(crate) fn in_ranges(idx: usize, ranges: &[Range<usize>]) -> bool {
    ranges.iter().any(|range| range.contains(&idx))
}

fn word_before(line: &str, idx: usize) -> bool {
    line[..idx].chars().next_back().is_some_and(char::is_alphanumeric)
}

fn word_after(line: &str, idx: usize) -> bool {
    line[idx..].chars().next().is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_in_handles_lf_and_crlf() {
        let text = "aa\r\nbbb\ncc";
        let lines: Vec<_> = lines_in(text, 0..text.len()).collect();
        assert_eq!(lines, vec![(0, "aa"), (4, "bbb"), (8, "cc")]);
    }

    #[test]
    fn lines_in_starts_at_line_of_range_start() {
        let text = "one\ntwo\nthree";
        let lines: Vec<_> = lines_in(text, 5..6).collect();
        assert_eq!(lines, vec![(4, "two")]);
    }

    #[test]
    fn lines_in_trailing_newline_and_empty_range() {
        let text = "a\n";
        let lines: Vec<_> = lines_in(text, 0..2).collect();
        assert_eq!(lines, vec![(0, "a")]);
        assert_eq!(lines_in(text, 1..1).count(), 0);
    }

    #[test]
    fn delimiter_pairs_and_unterminated() {
        let found = Delimiter::new("**").find("a **b** c **d");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, 2..7);
        assert_eq!(found[0].content, 4..5);
        assert_eq!(found[0].symbols, vec![2..4, 5..7]);
    }

    #[test]
    fn delimiter_empty_content_matches() {
        let found = Delimiter::new("~~").find("~~~~");
        assert_eq!(found.len(), 1);
        assert!(found[0].content.is_empty());
    }

    #[test]
    fn delimiter_respects_escape_and_code() {
        // The escaped opener is skipped and the trailing `**` has no closer.
        assert!(Delimiter::new("**").find(r"\**x**").is_empty());
        assert!(Delimiter::new("**").find("`**x**`").is_empty());
    }

    #[test]
    fn word_bounded_delimiter_ignores_intraword() {
        let italic = Delimiter::new("_").word_bounded();
        assert!(italic.find("snake_case_name").is_empty());
        assert_eq!(italic.find("an _emphasis_ here").len(), 1);
    }

    #[test]
    fn match_offset_shifts_everything() {
        let m = ElementMatch::new(0..4, vec![0..1, 3..4], 1..3)
            .with_target(1..2)
            .offset(10);
        assert_eq!(m.range, 10..14);
        assert_eq!(m.symbols, vec![10..11, 13..14]);
        assert_eq!(m.content, 11..13);
        assert_eq!(m.target, Some(11..12));
    }
}
