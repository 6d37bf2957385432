use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{ElementMatch, MarkdownElement};
use crate::markdown::span::{ReplacementRange, StyleSpan};
use crate::style::{AttributeValue, Font};

/// What a preview shows instead of a bullet marker.
pub const BULLET_GLYPH: &str = "•";

/// `- item`, `* item` or `+ item` at the start of a line.
#[derive(Clone, Debug)]
pub struct BulletElement {
    symbols_color: Rgba,
    text_color: Rgba,
    font: Font,
}

impl BulletElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
            text_color: config.text_color(),
            font: config.body_font(),
        }
    }
}

impl Default for BulletElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for BulletElement {
    fn name(&self) -> &'static str {
        "Bullet"
    }

    fn symbols_color(&self) -> Rgba {
        self.symbols_color
    }

    fn find_in_line(&self, line: &str) -> Vec<ElementMatch> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let bytes = line.as_bytes();
        let marker = bytes.get(indent).copied();
        let spaced = matches!(bytes.get(indent + 1), Some(b' ' | b'\t'));
        if !matches!(marker, Some(b'-' | b'*' | b'+')) || !spaced {
            return Vec::new();
        }

        let after = &line[indent + 1..];
        let content_start = line.len() - after.trim_start_matches([' ', '\t']).len();
        vec![ElementMatch::new(
            indent..line.len(),
            vec![indent..indent + 1],
            content_start..line.len(),
        )]
    }

    fn content_styles(&self, _text: &str, found: &ElementMatch) -> Vec<StyleSpan> {
        vec![
            StyleSpan::new(found.content.clone(), AttributeValue::Font(self.font.clone())),
            StyleSpan::new(
                found.content.clone(),
                AttributeValue::ForegroundColor(self.text_color),
            ),
        ]
    }

    fn replacement(&self, _text: &str, found: &ElementMatch) -> ReplacementRange {
        ReplacementRange::new(found.symbols[0].clone(), BULLET_GLYPH)
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
