use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{Delimiter, ElementMatch, MarkdownElement};
use crate::markdown::span::StyleSpan;
use crate::style::{AttributeValue, FontTraits};

const DELIMITER: Delimiter = Delimiter::new("**");

/// `**bold**`
#[derive(Clone, Debug)]
pub struct BoldElement {
    symbols_color: Rgba,
}

impl BoldElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
        }
    }
}

impl Default for BoldElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for BoldElement {
    fn name(&self) -> &'static str {
        "Bold"
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
            AttributeValue::FontTraits(FontTraits::BOLD),
        )]
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
