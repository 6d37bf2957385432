//! Paragraph ranges and the re-scan policy.
//!
//! Styling is recomputed per paragraph (line). After an edit the affected
//! paragraph is reset and re-scanned; when the edit reaches the paragraph's
//! trailing border, the following paragraph is re-scanned too, because a
//! line-start marker (`#`, `-`) may now belong to a different line.

use std::ops::Range;

use crate::error::{Result, check_range};

/// The most recent mutation of a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset where the mutation starts.
    pub start: usize,
    /// Bytes removed.
    pub old_len: usize,
    /// Bytes inserted in their place.
    pub new_len: usize,
}

impl Edit {
    #[must_use]
    pub const fn new(start: usize, old_len: usize, new_len: usize) -> Self {
        Self {
            start,
            old_len,
            new_len,
        }
    }

    /// Edited range in the text after the mutation.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.start + self.new_len
    }
}

/// Expand `range` to whole paragraphs, line terminators included.
///
/// An empty range yields the paragraph containing its position. If the last
/// character of `range` is a `\n`, the paragraph ends right there.
pub fn paragraph_range(text: &str, range: Range<usize>) -> Result<Range<usize>> {
    check_range(text, &range)?;
    let start = text[..range.start].rfind('\n').map_or(0, |idx| idx + 1);
    let end = if range.end > range.start && text[..range.end].ends_with('\n') {
        range.end
    } else {
        text[range.end..]
            .find('\n')
            .map_or(text.len(), |idx| range.end + idx + 1)
    };
    Ok(start..end)
}

/// Range to reset and re-style after `edit`.
///
/// This is the paragraph containing the edited range, extended by the next
/// paragraph when the edit touches the trailing border of the first one
/// (typically a newline typed in the middle or at the end of a line).
pub fn rescan_range(text: &str, edit: &Edit) -> Result<Range<usize>> {
    let edited = edit.range();
    let paragraph = paragraph_range(text, edited.clone())?;
    if paragraph.is_empty() {
        return Ok(paragraph);
    }

    let last_paragraph_index = paragraph.end - 1;
    let last_edited_index = edited.start.max(edited.end.saturating_sub(1));
    let touches_trailing_border = last_paragraph_index <= last_edited_index;
    let next_paragraph_exists = last_paragraph_index < text.len() - 1;

    if touches_trailing_border && next_paragraph_exists {
        let next_char = text[paragraph.end..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        return paragraph_range(text, paragraph.start..paragraph.end + next_char);
    }
    Ok(paragraph)
}
