//! Text storage that keeps markdown styling current while it is edited.

use std::ops::Range;

use super::attributed::AttributedText;
use super::rope::ByteRope;
use super::runs::AttributeRuns;
use crate::config::StylesConfiguration;
use crate::error::Result;
use crate::event::{LogLevel, emit_log_with};
use crate::markdown::{Edit, MarkdownElement, MarkdownParser, apply_styles, rescan_range};
use crate::style::Attributes;

/// Nesting levels stripped by [`MarkdownTextStorage::attributed_string`].
const MAX_STRIP_PASSES: usize = 8;

/// Rope-backed text plus attribute runs, re-styled after every edit.
///
/// Each [`replace_characters`](Self::replace_characters) records the edit and
/// re-styles the affected paragraph (and the following one when the edit
/// touches the paragraph border). Everything outside that range keeps its
/// attributes.
///
/// # Examples
///
/// ```
/// use markstyle::{FontTraits, MarkdownTextStorage};
///
/// let mut storage = MarkdownTextStorage::with_text("Some **bold**").unwrap();
/// assert!(storage.attributes_at(8).unwrap().traits().contains(FontTraits::BOLD));
///
/// storage.replace_characters(0..0, "# ").unwrap();
/// assert_eq!(storage.text(), "# Some **bold**");
/// assert_eq!(storage.revision(), 2);
/// ```
#[derive(Debug)]
pub struct MarkdownTextStorage {
    rope: ByteRope,
    runs: AttributeRuns,
    configuration: StylesConfiguration,
    parser: MarkdownParser,
    revision: u64,
    pending_edit: Option<Edit>,
}

impl Default for MarkdownTextStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownTextStorage {
    /// Empty storage with the default configuration and recognizers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_configuration(StylesConfiguration::default())
    }

    #[must_use]
    pub fn with_configuration(configuration: StylesConfiguration) -> Self {
        let parser = MarkdownParser::with_default_elements(&configuration);
        Self {
            rope: ByteRope::new(),
            runs: AttributeRuns::default(),
            configuration,
            parser,
            revision: 0,
            pending_edit: None,
        }
    }

    /// Storage holding `text`, fully styled.
    pub fn with_text(text: &str) -> Result<Self> {
        let mut storage = Self::new();
        storage.set_text(text)?;
        Ok(storage)
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.replace_characters(0..self.len(), text)
    }

    /// Replace the bytes in `range` with `text`, then re-style.
    ///
    /// The edit is applied before styling runs, so a styling failure leaves
    /// the new text in place with default attributes over the re-scanned
    /// range.
    pub fn replace_characters(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        self.rope.check_range(&range)?;

        let defaults = self.configuration.default_attributes();
        self.rope.replace(range.clone(), text);
        self.runs.replace(range.clone(), text.len(), &defaults);
        self.revision += 1;
        self.pending_edit = Some(Edit::new(range.start, range.len(), text.len()));

        self.process_editing()
    }

    /// Re-style the region touched by the last recorded edit.
    ///
    /// Only the lines around the edit are copied out of the rope and scanned.
    pub fn process_editing(&mut self) -> Result<()> {
        let Some(edit) = self.pending_edit.take() else {
            return Ok(());
        };
        let window = self.rope.line_window(edit.range());
        let base = window.start;
        let text = self.rope.slice_to_string(window);
        let local = Edit::new(edit.start - base, edit.old_len, edit.new_len);
        let range = rescan_range(&text, &local)?;
        emit_log_with(LogLevel::Debug, || {
            format!(
                "edit {edit:?}: re-styling {:?}",
                range.start + base..range.end + base
            )
        });
        self.restyle(&text, base, range)
    }

    /// Re-style the whole text.
    pub fn refresh(&mut self) -> Result<()> {
        self.pending_edit = None;
        let text = self.text();
        self.runs = AttributeRuns::new(text.len(), self.configuration.default_attributes());
        self.restyle(&text, 0, 0..text.len())
    }

    /// Switch configuration; every recognizer is rebuilt for it.
    pub fn set_configuration(&mut self, configuration: StylesConfiguration) -> Result<()> {
        self.parser = self.parser.applying(&configuration);
        self.configuration = configuration;
        self.refresh()
    }

    /// Replace the recognizer set; the recognizers are rebuilt for the
    /// current configuration.
    pub fn use_elements(&mut self, elements: Vec<Box<dyn MarkdownElement>>) -> Result<()> {
        self.parser = MarkdownParser::new(elements).applying(&self.configuration);
        self.refresh()
    }

    /// Reset and re-style `range` of `text`, a slice that starts at byte
    /// `base` of the stored text.
    fn restyle(&mut self, text: &str, base: usize, range: Range<usize>) -> Result<()> {
        let defaults = self.configuration.default_attributes();
        let stored = range.start + base..range.end + base;
        self.runs.set(stored.clone(), &defaults);

        let result = self.parser.styles(text, range).and_then(|spans| {
            let spans: Vec<_> = spans.into_iter().map(|span| span.shifted(base)).collect();
            apply_styles(&mut self.runs, &spans)
        });
        if let Err(err) = &result {
            emit_log_with(LogLevel::Warn, || {
                format!("styling {stored:?} failed, using default attributes: {err}")
            });
            self.runs.set(stored, &defaults);
        }
        result
    }

    /// Attributes in effect at byte `offset`.
    #[must_use]
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        self.runs.at(offset)
    }

    #[must_use]
    pub fn runs(&self) -> &AttributeRuns {
        &self.runs
    }

    /// Copy of the text.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Number of edits applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn configuration(&self) -> &StylesConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn parser(&self) -> &MarkdownParser {
        &self.parser
    }

    /// Snapshot of the styled text, optionally with markdown symbols replaced
    /// by their preview values.
    ///
    /// Symbols are stripped outermost first, one nesting level per pass, so
    /// every value still sits inside the characters it replaces and keeps
    /// their attributes.
    pub fn attributed_string(&self, removing_symbols: bool) -> Result<AttributedText> {
        let mut attributed = AttributedText::new(self.text(), self.runs.clone());
        if !removing_symbols {
            return Ok(attributed);
        }
        for _ in 0..=MAX_STRIP_PASSES {
            let replacements = self
                .parser
                .outermost_replacement_ranges(attributed.as_str());
            if replacements.is_empty() {
                break;
            }
            attributed.apply_replacements(&replacements)?;
        }
        Ok(attributed)
    }
}
