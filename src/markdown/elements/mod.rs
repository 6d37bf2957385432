//! Built-in recognizers.

pub mod bold;
pub mod bullet;
pub mod header;
pub mod inline_code;
pub mod italic;
pub mod link;
pub mod strikethrough;

pub use bold::BoldElement;
pub use bullet::{BULLET_GLYPH, BulletElement};
pub use header::HeaderElement;
pub use inline_code::InlineCodeElement;
pub use italic::ItalicElement;
pub use link::LinkElement;
pub use strikethrough::StrikethroughElement;

use super::element::MarkdownElement;
use crate::config::StylesConfiguration;

/// Every built-in recognizer, configured for `config`.
///
/// Line-level recognizers come first so their font substitutions land
/// before inline code replaces the family of its content.
#[must_use]
pub fn default_elements(config: &StylesConfiguration) -> Vec<Box<dyn MarkdownElement>> {
    vec![
        Box::new(HeaderElement::new(config)),
        Box::new(BulletElement::new(config)),
        Box::new(BoldElement::new(config)),
        Box::new(ItalicElement::new(config)),
        Box::new(StrikethroughElement::new(config)),
        Box::new(InlineCodeElement::new(config)),
        Box::new(LinkElement::new(config)),
    ]
}
