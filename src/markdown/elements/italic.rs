use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{Delimiter, ElementMatch, MarkdownElement};
use crate::markdown::span::StyleSpan;
use crate::style::{AttributeValue, FontTraits};

// `_` inside words (snake_case) is not emphasis.
const DELIMITER: Delimiter = Delimiter::new("_").word_bounded();

/// `_italic_`
#[derive(Clone, Debug)]
pub struct ItalicElement {
    symbols_color: Rgba,
}

impl ItalicElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
        }
    }
}

impl Default for ItalicElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for ItalicElement {
    fn name(&self) -> &'static str {
        "Italic"
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
            AttributeValue::FontTraits(FontTraits::ITALIC),
        )]
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
