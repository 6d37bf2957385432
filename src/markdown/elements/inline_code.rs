use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{Delimiter, ElementMatch, MarkdownElement};
use crate::markdown::span::StyleSpan;
use crate::style::{AttributeValue, Font};

const DELIMITER: Delimiter = Delimiter::new("`").inside_code();

/// `` `code` `` rendered in a monospace font at the base size.
#[derive(Clone, Debug)]
pub struct InlineCodeElement {
    symbols_color: Rgba,
    font: Font,
}

impl InlineCodeElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
            font: Font::monospace(config.base_font().size).dynamic_if(config.use_dynamic_sizing()),
        }
    }

    /// Use another code font, e.g. a named face.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

impl Default for InlineCodeElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for InlineCodeElement {
    fn name(&self) -> &'static str {
        "InlineCode"
    }

    fn symbols_color(&self) -> Rgba {
        self.symbols_color
    }

    fn find_in_line(&self, line: &str) -> Vec<ElementMatch> {
        DELIMITER.find(line)
    }

    fn content_styles(&self, _text: &str, found: &ElementMatch) -> Vec<StyleSpan> {
        vec![StyleSpan::new(
            found.content.clone(),
            AttributeValue::Font(self.font.clone()),
        )]
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
