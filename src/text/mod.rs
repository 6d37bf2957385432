//! Styled text storage.
//!
//! - [`MarkdownTextStorage`]: rope-backed text whose attributes are kept in
//!   sync with its markdown while it is edited
//! - [`AttributeRuns`]: contiguous attribute runs; implements
//!   [`AttributeStore`](crate::markdown::AttributeStore)
//! - [`AttributedText`]: immutable snapshot, optionally with markdown symbols
//!   replaced by their preview values
//!
//! # Examples
//!
//! ```
//! use markstyle::{FontTraits, MarkdownTextStorage};
//!
//! let mut storage = MarkdownTextStorage::with_text("Hello **world**").unwrap();
//! let preview = storage.attributed_string(true).unwrap();
//! assert_eq!(preview.as_str(), "Hello world");
//! assert!(preview.attributes_at(6).unwrap().traits().contains(FontTraits::BOLD));
//!
//! storage.replace_characters(0..0, "# ").unwrap();
//! assert_eq!(storage.attributed_string(true).unwrap().as_str(), "Hello world");
//! ```

mod attributed;
mod rope;
mod runs;
mod storage;

pub use attributed::AttributedText;
pub use rope::ByteRope;
pub use runs::{AttributeRun, AttributeRuns};
pub use storage::MarkdownTextStorage;
