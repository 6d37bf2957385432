//! Immutable styled text snapshots.

use std::cmp::Reverse;

use super::runs::AttributeRuns;
use crate::error::{Error, Result, check_range};
use crate::markdown::ReplacementRange;
use crate::style::Attributes;

/// A string with attribute runs covering it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    runs: AttributeRuns,
}

impl AttributedText {
    /// Pair `text` with `runs`; the runs must cover the text.
    #[must_use]
    pub fn new(text: impl Into<String>, runs: AttributeRuns) -> Self {
        let text = text.into();
        debug_assert_eq!(text.len(), runs.len());
        Self { text, runs }
    }

    /// Text with uniform `attributes`.
    #[must_use]
    pub fn plain(text: impl Into<String>, attributes: Attributes) -> Self {
        let text = text.into();
        let runs = AttributeRuns::new(text.len(), attributes);
        Self { text, runs }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn runs(&self) -> &AttributeRuns {
        &self.runs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        self.runs.at(offset)
    }

    /// Apply preview replacements to text and runs, back to front.
    ///
    /// When the replacement value occurs inside the replaced characters (the
    /// usual case: `**bold**` becomes `bold`), the value keeps the runs it had
    /// there. Otherwise it takes the attributes at the start of the range.
    pub fn apply_replacements(&mut self, ranges: &[ReplacementRange]) -> Result<()> {
        let mut ordered: Vec<&ReplacementRange> = ranges.iter().collect();
        ordered.sort_by_key(|r| Reverse(r.range.start));
        for replacement in &ordered {
            check_range(&self.text, &replacement.range)?;
        }
        for pair in ordered.windows(2) {
            let (later, earlier) = (pair[0], pair[1]);
            if earlier.overlaps(later) || earlier.range.start == later.range.start {
                return Err(Error::OverlappingReplacements {
                    first: earlier.range.clone(),
                    second: later.range.clone(),
                });
            }
        }

        for replacement in ordered {
            self.replace_one(replacement);
        }
        Ok(())
    }

    fn replace_one(&mut self, replacement: &ReplacementRange) {
        let range = replacement.range.clone();
        let value = replacement.replacement.as_str();

        let kept: Vec<_> = match self.text[range.clone()].find(value) {
            Some(pos) if !value.is_empty() => {
                let from = range.start + pos;
                self.runs.in_range(from..from + value.len()).collect()
            }
            _ => Vec::new(),
        };

        self.text.replace_range(range.clone(), value);
        if kept.is_empty() {
            let attributes = self.runs.at(range.start).cloned().unwrap_or_default();
            self.runs.replace_with(range, value.len(), attributes);
            return;
        }

        self.runs.replace_with(range.clone(), 0, Attributes::default());
        let mut at = range.start;
        for run in kept {
            let len = run.range.len();
            self.runs.replace_with(at..at, len, run.attributes);
            at += len;
        }
    }
}

impl std::fmt::Display for AttributedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
