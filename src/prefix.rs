//! Prefix sums over word lengths.
//!
//! `sums[0] = 0` and `sums[k] = sums[k - 1] + len(word k)`, so the combined
//! length of words `i..=j` is `sums[j] - sums[i - 1]` in O(1).

use crate::utils::word_len;

/// Cumulative word lengths for one word sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLengths {
    sums: Vec<usize>,
}

impl PrefixLengths {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let mut sums = Vec::with_capacity(words.len() + 1);
        sums.push(0);
        let mut total = 0usize;
        for w in words {
            total += word_len(w.as_ref());
            sums.push(total);
        }
        Self { sums }
    }

    /// Number of words covered by the table.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.sums.len() - 1
    }

    /// Length of word `k` (1-based).
    #[inline]
    pub fn word_len(&self, k: usize) -> usize {
        debug_assert!(k >= 1 && k <= self.num_words());
        self.sums[k] - self.sums[k - 1]
    }

    /// Combined length of words `i..=j` (1-based, `i <= j`), spaces excluded.
    #[inline]
    pub fn range_len(&self, i: usize, j: usize) -> usize {
        debug_assert!(i >= 1 && i <= j && j <= self.num_words());
        self.sums[j] - self.sums[i - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.sums
    }
}
