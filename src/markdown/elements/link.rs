use crate::color::Rgba;
use crate::config::StylesConfiguration;
use crate::markdown::element::{ElementMatch, MarkdownElement, code_spans, in_ranges, is_escaped};
use crate::markdown::span::StyleSpan;
use crate::style::AttributeValue;

/// `[text](target)`; images (`![alt](src)`) are left alone.
#[derive(Clone, Debug)]
pub struct LinkElement {
    symbols_color: Rgba,
    links_color: Rgba,
}

impl LinkElement {
    #[must_use]
    pub fn new(config: &StylesConfiguration) -> Self {
        Self {
            symbols_color: config.symbols_color(),
            links_color: config.links_color(),
        }
    }

    fn find_unescaped(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
        (from..bytes.len()).find(|&idx| bytes[idx] == needle && !is_escaped(bytes, idx))
    }
}

impl Default for LinkElement {
    fn default() -> Self {
        Self::new(&StylesConfiguration::default())
    }
}

impl MarkdownElement for LinkElement {
    fn name(&self) -> &'static str {
        "Link"
    }

    fn symbols_color(&self) -> Rgba {
        self.symbols_color
    }

    fn find_in_line(&self, line: &str) -> Vec<ElementMatch> {
        let bytes = line.as_bytes();
        let code = code_spans(line);
        let mut found = Vec::new();
        let mut i = 0usize;

        while i < bytes.len() {
            let opens = bytes[i] == b'['
                && !is_escaped(bytes, i)
                && !in_ranges(i, &code)
                && !(i > 0 && bytes[i - 1] == b'!');
            if opens {
                let Some(close) = Self::find_unescaped(bytes, i + 1, b']') else {
                    break;
                };
                let paren = close + 1;
                if bytes.get(paren) == Some(&b'(') {
                    if let Some(end) = Self::find_unescaped(bytes, paren + 1, b')') {
                        let target = paren + 1..end;
                        let mut symbols = vec![i..i + 1, close..close + 1, paren..paren + 1];
                        if !target.is_empty() {
                            symbols.push(target.clone());
                        }
                        symbols.push(end..end + 1);
                        found.push(
                            ElementMatch::new(i..end + 1, symbols, i + 1..close)
                                .with_target(target),
                        );
                        i = end + 1;
                        continue;
                    }
                }
            }
            i += 1;
        }
        found
    }

    fn content_styles(&self, text: &str, found: &ElementMatch) -> Vec<StyleSpan> {
        let mut spans = vec![StyleSpan::new(
            found.content.clone(),
            AttributeValue::ForegroundColor(self.links_color),
        )];
        if let Some(target) = found.target.clone() {
            spans.push(StyleSpan::new(
                found.content.clone(),
                AttributeValue::Link(text[target].to_string()),
            ));
        }
        spans
    }

    fn applying(&self, config: &StylesConfiguration) -> Box<dyn MarkdownElement> {
        Box::new(Self::new(config))
    }
}
