//! `markstyle` - Live markdown styling for editable text
//!
//! Recognizes markdown constructs (headers, bullets, bold, italic,
//! strikethrough, inline code, links) inside plain text and produces
//! attribute spans for them, re-styling only the paragraphs an edit touches.
//! A preview mode strips the markdown symbols.
//!
//! The recognition core ([`markdown`]) never owns text or attributes; it
//! talks to storage through [`AttributeStore`]. [`MarkdownTextStorage`] is the
//! bundled rope-backed integration.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional size casts
#![allow(clippy::cast_sign_loss)] // Intentional size conversions
#![allow(clippy::cast_precision_loss)] // Intentional for font sizes
#![allow(clippy::cast_possible_wrap)] // Byte lengths fit in isize
#![allow(clippy::module_name_repetitions)] // Allow markdown::MarkdownParser etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::float_cmp)] // Font sizes are compared exactly in tests
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod markdown;
pub mod style;
pub mod text;

// Re-export core types at crate root
pub use color::Rgba;
pub use config::{StylesConfiguration, StylesConfigurationBuilder};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use style::{AttributeKey, AttributeValue, Attributes, Font, FontFamily, FontTraits};

// Re-export the recognition core
pub use markdown::{
    AttributeStore, Edit, ElementMatch, MarkdownElement, MarkdownParser, ReplacementRange,
    StyleSpan, apply_styles, rescan_range,
};

// Re-export storage types
pub use text::{AttributeRun, AttributeRuns, AttributedText, ByteRope, MarkdownTextStorage};
