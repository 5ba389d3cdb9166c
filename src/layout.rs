//! Result of a formatting run and reconstruction of its lines.
//!
//! A [`Partition`] holds the finished DP tables. Lines are recovered by
//! walking the break-point table backwards from the last word:
//!
//! ```text
//! j = num
//! while j != 0:
//!     emit line p[j]..=j
//!     j = p[j] - 1
//! ```
//!
//! This yields lines last-first ([`Partition::line_ranges_rev`]); the other
//! accessors reverse them into reading order.

use std::ops::RangeInclusive;

use crate::error::FormatError;
use crate::utils::word_len;

/// Optimal partition of a word sequence into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    width: usize,
    /// `costs[j]`: minimum total penalty of the first `j` words.
    costs: Vec<u64>,
    /// `breaks[j]`: first word of the line ending at word `j`; `breaks[0]` is unused.
    breaks: Vec<usize>,
}

impl Partition {
    pub(crate) fn new(width: usize, costs: Vec<u64>, breaks: Vec<usize>) -> Self {
        debug_assert_eq!(costs.len(), breaks.len());
        debug_assert!(!costs.is_empty());
        Self {
            width,
            costs,
            breaks,
        }
    }

    /// Minimum total penalty over all ways to break the words into lines.
    #[inline]
    pub fn total_cost(&self) -> u64 {
        self.costs[self.num_words()]
    }

    #[inline]
    pub fn num_words(&self) -> usize {
        self.costs.len() - 1
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The full cost table, indexed `0..=num_words`.
    pub fn cost_table(&self) -> &[u64] {
        &self.costs
    }

    /// The full break-point table, indexed `0..=num_words` (entry 0 unused).
    pub fn break_table(&self) -> &[usize] {
        &self.breaks
    }

    /// Start of the optimal line ending at word `j`, for `1 <= j <= num_words`.
    pub fn break_at(&self, j: usize) -> Option<usize> {
        if j == 0 {
            return None;
        }
        self.breaks.get(j).copied()
    }

    /// Word ranges of the lines, last line first.
    pub fn line_ranges_rev(&self) -> Backtrack<'_> {
        Backtrack {
            breaks: &self.breaks,
            j: self.num_words(),
        }
    }

    /// Word ranges of the lines in reading order.
    pub fn line_ranges(&self) -> Vec<RangeInclusive<usize>> {
        let mut ranges: Vec<_> = self.line_ranges_rev().collect();
        ranges.reverse();
        ranges
    }

    #[inline]
    pub fn num_lines(&self) -> usize {
        self.line_ranges_rev().count()
    }

    /// Materialise the lines in reading order.
    ///
    /// `words` must be the sequence this partition was computed for; a slice
    /// of any other length is rejected with [`FormatError::WordCountMismatch`].
    pub fn lines<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Line>, FormatError> {
        if words.len() != self.num_words() {
            return Err(FormatError::WordCountMismatch {
                expected: self.num_words(),
                actual: words.len(),
            });
        }
        let lines = self
            .line_ranges()
            .into_iter()
            .enumerate()
            .map(|(idx, range)| {
                let (i, j) = (*range.start(), *range.end());
                let text = words[i - 1..j]
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<&str>>()
                    .join(" ");
                let len = word_len(&text);
                Line {
                    number: idx + 1,
                    words: range,
                    slack: self.width.saturating_sub(len),
                    penalty: self.costs[j].saturating_sub(self.costs[i - 1]),
                    len,
                    text,
                }
            })
            .collect();
        Ok(lines)
    }
}

/// Iterator over line ranges produced by walking break points backwards.
#[derive(Debug, Clone)]
pub struct Backtrack<'a> {
    breaks: &'a [usize],
    j: usize,
}

impl Iterator for Backtrack<'_> {
    type Item = RangeInclusive<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.j == 0 {
            return None;
        }
        let end = self.j;
        let start = self.breaks[end];
        debug_assert!(start >= 1 && start <= end, "break table not populated");
        self.j = start - 1;
        Some(start..=end)
    }
}

/// One rendered output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position, top to bottom.
    pub number: usize,
    /// 1-based inclusive range of words on this line.
    pub words: RangeInclusive<usize>,
    /// Words joined by single spaces.
    pub text: String,
    /// Length of `text` in chars.
    pub len: usize,
    /// Unused columns at the end of the line.
    pub slack: usize,
    /// This line's share of the total cost.
    pub penalty: u64,
}

impl Line {
    pub fn word_count(&self) -> usize {
        self.words.end() + 1 - self.words.start()
    }
}
