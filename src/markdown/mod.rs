//! Markdown recognition and incremental re-styling.
//!
//! - [`MarkdownElement`]: one recognizer per construct (bold, italic,
//!   strikethrough, inline code, link, bullet, header)
//! - [`MarkdownParser`]: runs recognizers over a range and computes preview
//!   replacements
//! - [`rescan_range`]: the paragraph-level region to re-style after an edit
//! - [`apply_styles`]: applies spans to an [`AttributeStore`], composing
//!   font traits by union
//!
//! # Examples
//!
//! ```
//! use markstyle::StylesConfiguration;
//! use markstyle::markdown::{Edit, MarkdownParser, rescan_range};
//!
//! let parser = MarkdownParser::with_default_elements(&StylesConfiguration::default());
//! let text = "# Title\nSome **bold** text";
//!
//! // A character was typed at offset 14.
//! let range = rescan_range(text, &Edit::new(14, 0, 1)).unwrap();
//! assert_eq!(range, 8..text.len());
//!
//! let spans = parser.styles(text, range).unwrap();
//! assert!(!spans.is_empty());
//! assert_eq!(parser.preview(text).unwrap(), "Title\nSome bold text");
//! ```

mod apply;
pub mod element;
pub mod elements;
mod paragraph;
mod parser;
mod span;

pub use apply::{AttributeStore, apply_style, apply_styles};
pub use element::{ElementMatch, MarkdownElement};
pub use elements::default_elements;
pub use paragraph::{Edit, paragraph_range, rescan_range};
pub use parser::{MarkdownParser, apply_replacements};
pub use span::{ReplacementRange, StyleSpan};
