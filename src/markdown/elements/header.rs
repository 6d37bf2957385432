use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{ElementMatch, MarkdownElement};
use crate::markdown::span::StyleSpan;
use crate::style::{AttributeValue, Font, FontTraits};

/// Size multipliers for header levels 1 through 6.
const LEVEL_SCALE: [f32; 6] = [1.6, 1.4, 1.25, 1.1, 1.0, 0.9];

/// `# Header` through `###### Header`.
#[derive(Clone, Debug)]
pub struct HeaderElement {
    symbols_color: Rgba,
    text_color: Rgba,
    base_font: Font,
    dynamic: bool,
}

impl HeaderElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
            text_color: config.text_color(),
            base_font: config.base_font().clone(),
            dynamic: config.use_dynamic_sizing(),
        }
    }

    /// Font for a header of `level` (1-based, clamped to 6).
    #[must_use]
    pub fn font_for_level(&self, level: usize) -> Font {
        let scale = LEVEL_SCALE[level.clamp(1, 6) - 1];
        self.base_font
            .clone()
            .with_size(self.base_font.size * scale)
            .adding(FontTraits::BOLD)
            .dynamic_if(self.dynamic)
    }
}

impl Default for HeaderElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for HeaderElement {
    fn name(&self) -> &'static str {
        "Header"
    }

    fn symbols_color(&self) -> Rgba {
        self.symbols_color
    }

    fn find_in_line(&self, line: &str) -> Vec<ElementMatch> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return Vec::new();
        }
        let rest = &line[indent..];
        let level = rest.bytes().take_while(|&b| b == b'#').count();
        let after = &rest[level..];
        if !(1..=6).contains(&level) || !after.starts_with([' ', '\t']) {
            return Vec::new();
        }

        let content_start = line.len() - after.trim_start_matches([' ', '\t']).len();
        vec![ElementMatch::new(
            indent..line.len(),
            vec![indent..indent + level],
            content_start..line.len(),
        )]
    }

    fn content_styles(&self, _text: &str, found: &ElementMatch) -> Vec<StyleSpan> {
        let level = found.symbols.first().map_or(1, |hashes| hashes.len());
        vec![
            StyleSpan::new(
                found.content.clone(),
                AttributeValue::Font(self.font_for_level(level)),
            ),
            StyleSpan::new(
                found.content.clone(),
                AttributeValue::ForegroundColor(self.text_color),
            ),
        ]
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
