//! Span types produced by recognizers.

use std::ops::Range;

use crate::style::{AttributeKey, AttributeValue};

/// One styling instruction over a byte range.
///
/// Spans are transient: they are recomputed on every scan and never kept
/// across edits.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub key: AttributeKey,
    pub value: AttributeValue,
    /// Offset whose current attributes a compositional value (font traits)
    /// is resolved against.
    pub anchor: usize,
}

impl StyleSpan {
    /// Create a span; the key follows the value and the anchor is the start.
    #[must_use]
    pub fn new(range: Range<usize>, value: AttributeValue) -> Self {
        debug_assert!(range.start <= range.end, "span range must be start <= end");
        Self {
            anchor: range.start,
            key: value.key(),
            range,
            value,
        }
    }

    /// The same span moved `base` bytes to the right.
    ///
    /// Used when a scan ran over a slice that starts at `base` in the full
    /// text.
    #[must_use]
    pub fn shifted(mut self, base: usize) -> Self {
        self.range = self.range.start + base..self.range.end + base;
        self.anchor += base;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A range of the current text and what a symbol-free preview shows
/// instead of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplacementRange {
    pub range: Range<usize>,
    pub replacement: String,
}

impl ReplacementRange {
    #[must_use]
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontTraits;

    #[test]
    fn span_key_follows_value() {
        let span = StyleSpan::new(2..5, AttributeValue::FontTraits(FontTraits::BOLD));
        assert_eq!(span.key, AttributeKey::FontTraits);
        assert_eq!(span.anchor, 2);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn span_shifted_moves_anchor() {
        let span = StyleSpan::new(2..5, AttributeValue::FontTraits(FontTraits::BOLD)).shifted(10);
        assert_eq!(span.range, 12..15);
        assert_eq!(span.anchor, 12);
        assert_eq!(span.key, AttributeKey::FontTraits);
    }

    #[test]
    fn replacement_overlap() {
        let a = ReplacementRange::new(0..9, "world");
        let b = ReplacementRange::new(9..11, "x");
        let c = ReplacementRange::new(8..10, "");
        assert!(!a.overlaps(&b)); // adjacent, not overlapping
        assert!(a.overlaps(&c));
    }
}
