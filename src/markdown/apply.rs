//! Applying style spans to attribute storage.
//!
//! The core never owns attribute storage. An integration exposes its store
//! through [`AttributeStore`] and calls [`apply_styles`] with the spans from
//! [`MarkdownParser::styles`](super::MarkdownParser::styles).

use std::ops::Range;

use super::span::StyleSpan;
use crate::error::{Error, Result, check_len};
use crate::style::{AttributeValue, Font, FontTraits};

/// Attribute storage a span list can be applied to.
pub trait AttributeStore {
    /// Length of the styled text in bytes.
    fn len(&self) -> usize;

    /// Returns true if the styled text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Font in effect at `offset`.
    fn font_at(&self, offset: usize) -> Option<Font>;

    /// Maximal sub-ranges of `range` with a uniform font, in order; together
    /// they cover `range`.
    fn font_runs(&self, range: Range<usize>) -> Vec<(Range<usize>, Option<Font>)>;

    /// Overwrite the attribute `value` addresses over `range`.
    fn add_attribute(&mut self, range: Range<usize>, value: AttributeValue);
}

/// Apply `spans` in order.
///
/// Stops at the first failing span; the store may then be partially styled
/// and the caller decides whether to fail the edit or reset the range.
pub fn apply_styles<S>(store: &mut S, spans: &[StyleSpan]) -> Result<()>
where
    S: AttributeStore + ?Sized,
{
    spans.iter().try_for_each(|span| apply_style(store, span))
}

/// Apply one span.
///
/// - `FontTraits` reads the font currently in place (starting at the span's
///   anchor) and writes back the union; it never replaces a font.
/// - `Font` substitutes family and size but keeps the traits already
///   accumulated, so emphasis survives a header or code font.
/// - Every other value overwrites its slot.
pub fn apply_style<S>(store: &mut S, span: &StyleSpan) -> Result<()>
where
    S: AttributeStore + ?Sized,
{
    let found = span.value.key();
    if span.key != found {
        return Err(Error::AttributeMismatch {
            expected: span.key,
            found,
        });
    }
    check_len(store.len(), &span.range)?;
    if span.is_empty() {
        return Ok(());
    }

    match &span.value {
        AttributeValue::FontTraits(traits) => {
            if store.font_at(span.anchor).is_none() {
                return Err(Error::MissingFont {
                    offset: span.anchor,
                });
            }
            for (range, font) in store.font_runs(span.range.clone()) {
                let font = font.ok_or(Error::MissingFont {
                    offset: range.start,
                })?;
                store.add_attribute(range, AttributeValue::Font(font.adding(*traits)));
            }
        }
        AttributeValue::Font(replacement) => {
            for (range, font) in store.font_runs(span.range.clone()) {
                let kept = font.map_or(FontTraits::empty(), |font| font.traits);
                store.add_attribute(
                    range,
                    AttributeValue::Font(replacement.clone().adding(kept)),
                );
            }
        }
        other => store.add_attribute(span.range.clone(), other.clone()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::style::{AttributeKey, Attributes};
    use crate::text::AttributeRuns;

    fn store(len: usize) -> AttributeRuns {
        AttributeRuns::new(len, Attributes::new(Font::system(14.0), Rgba::BLACK))
    }

    #[test]
    fn test_traits_union_in_either_order() {
        let bold = StyleSpan::new(0..4, AttributeValue::FontTraits(FontTraits::BOLD));
        let italic = StyleSpan::new(1..3, AttributeValue::FontTraits(FontTraits::ITALIC));

        for spans in [[bold.clone(), italic.clone()], [italic, bold]] {
            let mut runs = store(4);
            apply_styles(&mut runs, &spans).unwrap();
            assert_eq!(runs.at(2).unwrap().traits(), FontTraits::BOLD | FontTraits::ITALIC);
            assert_eq!(runs.at(0).unwrap().traits(), FontTraits::BOLD);
        }
    }

    #[test]
    fn test_font_substitution_keeps_traits() {
        let mut runs = store(6);
        let spans = [
            StyleSpan::new(2..4, AttributeValue::FontTraits(FontTraits::BOLD)),
            StyleSpan::new(0..6, AttributeValue::Font(Font::system(22.0))),
        ];
        apply_styles(&mut runs, &spans).unwrap();
        let font = runs.at(3).unwrap().font.clone().unwrap();
        assert_eq!(font.size, 22.0);
        assert!(font.traits.contains(FontTraits::BOLD));
        assert!(!runs.at(0).unwrap().traits().contains(FontTraits::BOLD));
    }

    #[test]
    fn test_missing_font_is_an_error() {
        let mut runs = AttributeRuns::new(3, Attributes::default());
        let span = StyleSpan::new(0..3, AttributeValue::FontTraits(FontTraits::BOLD));
        assert_eq!(
            apply_styles(&mut runs, &[span]),
            Err(Error::MissingFont { offset: 0 })
        );
    }

    #[test]
    fn test_mismatched_span_is_an_error() {
        let mut runs = store(3);
        let mut span = StyleSpan::new(0..3, AttributeValue::ForegroundColor(Rgba::RED));
        span.key = AttributeKey::FontTraits;
        assert_eq!(
            apply_style(&mut runs, &span),
            Err(Error::AttributeMismatch {
                expected: AttributeKey::FontTraits,
                found: AttributeKey::ForegroundColor,
            })
        );
    }

    #[test]
    fn test_out_of_bounds_span_is_rejected() {
        let mut runs = store(3);
        let span = StyleSpan::new(1..9, AttributeValue::Strikethrough(true));
        assert!(matches!(
            apply_style(&mut runs, &span),
            Err(Error::OutOfBounds { len: 3, .. })
        ));
    }
}
