//! Assorted helpers shared by the cost model and the partitioner.

use crate::config::WindowMode;

/// Upper bound on how many words fit on a line of `width` columns.
///
/// Every word is at least one char and words are separated by one space,
/// so `k` words need at least `2k - 1` columns. This returns
/// `ceil((width + 1) / 2)`, which is never smaller than the true bound.
#[inline]
pub fn max_words_per_line(width: usize) -> usize {
    width / 2 + 1
}

/// First candidate start index for a line ending at word `j` (1-based).
///
/// In [`WindowMode::Pruned`] this is `max(1, j + 1 - max_words_per_line)`;
/// starts further left cannot be feasible and are skipped.
#[inline]
pub fn window_start(j: usize, width: usize, mode: WindowMode) -> usize {
    match mode {
        WindowMode::Full => 1,
        WindowMode::Pruned => (j + 1).saturating_sub(max_words_per_line(width)).max(1),
    }
}

/// Length of a word as the cost model measures it: one column per `char`.
#[inline]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
