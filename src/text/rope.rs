//! Byte-addressed rope using the ropey crate.

use std::ops::Range;

use ropey::Rope;

use crate::error::{Error, Result, check_len};

/// Rope addressed by UTF-8 byte offsets.
///
/// ropey indexes by char; the markdown core speaks bytes. Offsets handed to
/// this type must already be validated with [`check_range`](Self::check_range).
/// Only `\n` breaks lines, matching the markdown paragraph rules.
#[derive(Clone, Debug, Default)]
pub struct ByteRope {
    rope: Rope,
}

impl ByteRope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Check if `offset` falls on a char boundary (the text length counts).
    #[must_use]
    pub fn is_char_boundary(&self, offset: usize) -> bool {
        if offset > self.rope.len_bytes() {
            return false;
        }
        self.rope.char_to_byte(self.rope.byte_to_char(offset)) == offset
    }

    /// Validate that `range` is a well-formed, char-aligned range inside the
    /// rope.
    pub fn check_range(&self, range: &Range<usize>) -> Result<()> {
        check_len(self.rope.len_bytes(), range)?;
        for offset in [range.start, range.end] {
            if !self.is_char_boundary(offset) {
                return Err(Error::NotCharBoundary { offset });
            }
        }
        Ok(())
    }

    /// Replace the bytes in `range` with `text`.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = self.rope.byte_to_char(range.start);
        let end = self.rope.byte_to_char(range.end);
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    /// Copy of the bytes in `range`.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        self.rope.byte_slice(range).to_string()
    }

    /// Byte offset of the start of `line_idx` (text length past the end).
    #[must_use]
    pub fn line_to_byte(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            self.rope.len_bytes()
        } else {
            self.rope.line_to_byte(line_idx)
        }
    }

    /// Line containing byte `offset`.
    #[must_use]
    pub fn byte_to_line(&self, offset: usize) -> usize {
        self.rope.byte_to_line(offset.min(self.rope.len_bytes()))
    }

    /// Whole lines from the one holding `range.start` through the line after
    /// the one holding `range.end`.
    ///
    /// This is everything the paragraph re-scan of an edit at `range` can
    /// look at.
    #[must_use]
    pub fn line_window(&self, range: Range<usize>) -> Range<usize> {
        let first = self.byte_to_line(range.start);
        let last = self.byte_to_line(range.end);
        self.line_to_byte(first)..self.line_to_byte(last + 2)
    }
}

impl std::fmt::Display for ByteRope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for ByteRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_by_bytes() {
        let mut rope = ByteRope::from_str("h\u{e9}llo");
        // "é" occupies bytes 1..3.
        rope.replace(1..3, "e");
        assert_eq!(rope.to_string(), "hello");
        rope.replace(5..5, ", world");
        assert_eq!(rope.to_string(), "hello, world");
        rope.replace(0..7, "");
        assert_eq!(rope.to_string(), "world");
    }

    #[test]
    fn test_lines() {
        let rope = ByteRope::from_str("one\ntwo\nthree");
        assert_eq!(rope.line_to_byte(1), 4);
        assert_eq!(rope.line_to_byte(9), 13);
        assert_eq!(rope.byte_to_line(9), 2);
        assert_eq!(rope.slice_to_string(4..7), "two");
    }

    #[test]
    fn test_line_window() {
        let rope = ByteRope::from_str("one\ntwo\nthree\nfour");
        assert_eq!(rope.line_window(5..5), 4..14);
        assert_eq!(rope.line_window(1..6), 0..14);
        // Ending right after a newline starts the next line.
        assert_eq!(rope.line_window(4..8), 4..18);
        assert_eq!(rope.line_window(15..15), 14..18);
    }

    #[test]
    fn test_only_newline_breaks_lines() {
        let rope = ByteRope::from_str("a\rb\u{2028}c\nd");
        assert_eq!(rope.line_window(2..2), 0..rope.len_bytes());
        assert_eq!(rope.byte_to_line(7), 0);
    }

    #[test]
    fn test_check_range() {
        let rope = ByteRope::from_str("h\u{e9}");
        assert!(rope.check_range(&(0..3)).is_ok());
        assert_eq!(
            rope.check_range(&(2..2)),
            Err(Error::NotCharBoundary { offset: 2 })
        );
        assert!(matches!(
            rope.check_range(&(0..4)),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            rope.check_range(&(2..1)),
            Err(Error::InvalidRange { .. })
        ));
    }
}
