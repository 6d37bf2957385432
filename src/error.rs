//! Error types for markstyle.

use std::fmt;
use std::ops::Range;

use crate::style::AttributeKey;

/// Result type alias for markstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for markstyle operations.
///
/// Range errors are caller contract violations (offsets are never clamped).
/// `MissingFont` and `AttributeMismatch` mean a recognizer and the attribute
/// store disagree about what is stored; they are coding defects, surfaced as
/// values so the integration layer can fail the edit or fall back to default
/// styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Range reaches past the end of the text.
    OutOfBounds { range: Range<usize>, len: usize },
    /// Range start is greater than its end.
    InvalidRange { range: Range<usize> },
    /// Offset splits a UTF-8 character.
    NotCharBoundary { offset: usize },
    /// A font-trait union found no font to extend.
    MissingFont { offset: usize },
    /// A span's value does not have the kind its key announces.
    AttributeMismatch {
        expected: AttributeKey,
        found: AttributeKey,
    },
    /// Two preview replacements claim the same characters.
    OverlappingReplacements {
        first: Range<usize>,
        second: Range<usize>,
    },
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { range, len } => {
                write!(f, "range {range:?} out of bounds for text of len {len}")
            }
            Self::InvalidRange { range } => write!(f, "invalid range {range:?}: start > end"),
            Self::NotCharBoundary { offset } => {
                write!(f, "offset {offset} is not on a char boundary")
            }
            Self::MissingFont { offset } => {
                write!(f, "unable to retrieve font for position {offset}")
            }
            Self::AttributeMismatch { expected, found } => {
                write!(
                    f,
                    "attribute `{expected:?}` carries a value of kind `{found:?}`"
                )
            }
            Self::OverlappingReplacements { first, second } => {
                write!(f, "replacement ranges {first:?} and {second:?} overlap")
            }
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
        }
    }
}

impl std::error::Error for Error {}

/// Validate that `range` is a well-formed, char-aligned range inside `text`.
pub(crate) fn check_range(text: &str, range: &Range<usize>) -> Result<()> {
    check_len(text.len(), range)?;
    for offset in [range.start, range.end] {
        if !text.is_char_boundary(offset) {
            return Err(Error::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Validate `range` against a length only.
pub(crate) fn check_len(len: usize, range: &Range<usize>) -> Result<()> {
    if range.start > range.end {
        return Err(Error::InvalidRange {
            range: range.clone(),
        });
    }
    if range.end > len {
        return Err(Error::OutOfBounds {
            range: range.clone(),
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::OutOfBounds { range: 3..9, len: 4 };
        assert!(err.to_string().contains("3..9"));
        assert!(err.to_string().contains("len 4"));

        let err = Error::MissingFont { offset: 7 };
        assert!(err.to_string().contains("position 7"));

        let err = Error::AttributeMismatch {
            expected: AttributeKey::FontTraits,
            found: AttributeKey::ForegroundColor,
        };
        assert!(err.to_string().contains("FontTraits"));
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("hello", &(0..5)).is_ok());
        assert!(check_range("hello", &(5..5)).is_ok());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 4..2;
        assert!(matches!(
            check_range("hello", &reversed),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            check_range("hello", &(0..6)),
            Err(Error::OutOfBounds { len: 5, .. })
        ));
        // "é" is two bytes; offset 1 splits it.
        assert_eq!(
            check_range("éa", &(1..2)),
            Err(Error::NotCharBoundary { offset: 1 })
        );
    }
}
