//! Attribute runs covering a text.

use std::ops::Range;

use crate::markdown::AttributeStore;
use crate::style::{AttributeValue, Attributes, Font};

/// A byte range with uniform attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    pub range: Range<usize>,
    pub attributes: Attributes,
}

impl AttributeRun {
    #[must_use]
    pub fn new(range: Range<usize>, attributes: Attributes) -> Self {
        Self { range, attributes }
    }

    /// Check if this run contains a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }
}

/// Contiguous, non-overlapping runs covering `0..len`.
///
/// Adjacent runs never carry equal attributes; every mutation coalesces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeRuns {
    runs: Vec<AttributeRun>,
}

impl AttributeRuns {
    /// One run of `attributes` over `len` bytes (no run when `len` is 0).
    #[must_use]
    pub fn new(len: usize, attributes: Attributes) -> Self {
        let runs = if len == 0 {
            Vec::new()
        } else {
            vec![AttributeRun::new(0..len, attributes)]
        };
        Self { runs }
    }

    /// Covered length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.last().map_or(0, |run| run.range.end)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeRun> {
        self.runs.iter()
    }

    /// Attributes at byte `pos`.
    #[must_use]
    pub fn at(&self, pos: usize) -> Option<&Attributes> {
        let idx = self.runs.partition_point(|run| run.range.end <= pos);
        self.runs
            .get(idx)
            .filter(|run| run.contains(pos))
            .map(|run| &run.attributes)
    }

    /// Runs overlapping `range`, clipped to it.
    pub fn in_range(&self, range: Range<usize>) -> impl Iterator<Item = AttributeRun> + '_ {
        let Range { start, end } = range;
        let first = self.runs.partition_point(|run| run.range.end <= start);
        self.runs[first..]
            .iter()
            .take_while(move |run| run.range.start < end)
            .map(move |run| {
                AttributeRun::new(
                    run.range.start.max(start)..run.range.end.min(end),
                    run.attributes.clone(),
                )
            })
    }

    /// Overwrite the attributes of `range`.
    pub fn set(&mut self, range: Range<usize>, attributes: &Attributes) {
        self.update(range, |attrs| attrs.clone_from(attributes));
    }

    /// Mutate the attributes of every run inside `range`.
    pub fn update(&mut self, range: Range<usize>, mut f: impl FnMut(&mut Attributes)) {
        if range.is_empty() {
            return;
        }
        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        for run in &mut self.runs[first..last] {
            f(&mut run.attributes);
        }
        self.coalesce();
    }

    /// Mirror a text edit: `range` was replaced by `new_len` bytes.
    ///
    /// Inserted bytes take the attributes of the byte before the edit, or of
    /// the first byte when editing at the start; `fallback` covers an
    /// otherwise empty text.
    pub fn replace(&mut self, range: Range<usize>, new_len: usize, fallback: &Attributes) {
        let inherited = range
            .start
            .checked_sub(1)
            .and_then(|prev| self.at(prev))
            .or_else(|| self.at(range.end))
            .unwrap_or(fallback)
            .clone();
        self.replace_with(range, new_len, inherited);
    }

    /// Mirror a text edit with explicit attributes for the inserted bytes.
    pub fn replace_with(&mut self, range: Range<usize>, new_len: usize, attributes: Attributes) {
        let old_len = range.len();
        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        self.runs.drain(first..last);

        let mut tail = first;
        if new_len > 0 {
            self.runs.insert(
                first,
                AttributeRun::new(range.start..range.start + new_len, attributes),
            );
            tail += 1;
        }
        for run in &mut self.runs[tail..] {
            run.range = run.range.start - old_len + new_len..run.range.end - old_len + new_len;
        }
        self.coalesce();
    }

    /// Ensure a run boundary at `offset`; returns the index of the run that
    /// starts there (or the run count at the end).
    fn split_at(&mut self, offset: usize) -> usize {
        let idx = self.runs.partition_point(|run| run.range.end <= offset);
        let Some(run) = self.runs.get_mut(idx) else {
            return self.runs.len();
        };
        if run.range.start >= offset {
            return idx;
        }
        let tail = AttributeRun::new(offset..run.range.end, run.attributes.clone());
        run.range.end = offset;
        self.runs.insert(idx + 1, tail);
        idx + 1
    }

    fn coalesce(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if prev.attributes == next.attributes && prev.range.end == next.range.start {
                prev.range.end = next.range.end;
                true
            } else {
                false
            }
        });
    }
}

impl<'a> IntoIterator for &'a AttributeRuns {
    type Item = &'a AttributeRun;
    type IntoIter = std::slice::Iter<'a, AttributeRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AttributeStore for AttributeRuns {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn font_at(&self, offset: usize) -> Option<Font> {
        self.at(offset).and_then(|attrs| attrs.font.clone())
    }

    fn font_runs(&self, range: Range<usize>) -> Vec<(Range<usize>, Option<Font>)> {
        self.in_range(range)
            .map(|run| (run.range, run.attributes.font))
            .collect()
    }

    fn add_attribute(&mut self, range: Range<usize>, value: AttributeValue) {
        self.update(range, |attrs| attrs.set(value.clone()));
    }
}
