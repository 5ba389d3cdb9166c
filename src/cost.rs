//! Cost of placing a contiguous run of words on one line.
//!
//! For a candidate line holding words `i..=j` (1-based) on a line of width `M`:
//!
//! ```text
//! slack = M - (j - i) - (prefix[j] - prefix[i - 1])
//! ```
//!
//! - words and spaces wider than `M`: the candidate is infeasible (`None`).
//! - `j == num`: the final line is never penalised (`Some(0)`).
//! - otherwise: `Some(badness(slack))`, `slack³` by default.
//!
//! Slack is computed in `usize` with checked arithmetic, so every width up to
//! `usize::MAX` is handled exactly.
//!
//! The model holds no state of its own beyond borrowed inputs and never errors.

use crate::prefix::PrefixLengths;
use crate::traits::{Badness, Cubic};

/// Penalty function for one word sequence and one line width.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a, B: Badness = Cubic> {
    prefix: &'a PrefixLengths,
    width: usize,
    badness: &'a B,
}

impl<'a, B: Badness> CostModel<'a, B> {
    pub fn new(prefix: &'a PrefixLengths, width: usize, badness: &'a B) -> Self {
        Self {
            prefix,
            width,
            badness,
        }
    }

    #[inline]
    pub fn num_words(&self) -> usize {
        self.prefix.num_words()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Blank trailing columns left when words `i..=j` share a line, or
    /// `None` when they do not fit.
    #[inline]
    pub fn slack(&self, i: usize, j: usize) -> Option<usize> {
        let used = self.prefix.range_len(i, j).checked_add(j - i)?;
        self.width.checked_sub(used)
    }

    /// Penalty of a line holding words `i..=j`, or `None` if they do not fit.
    #[inline]
    pub fn penalty(&self, i: usize, j: usize) -> Option<u64> {
        let slack = self.slack(i, j)?;
        if j == self.num_words() {
            Some(0)
        } else {
            let slack = u64::try_from(slack).unwrap_or(u64::MAX);
            Some(self.badness.badness(slack))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_fox() -> PrefixLengths {
        PrefixLengths::new(&["The", "quick", "brown", "fox"])
    }

    #[test]
    fn the_quick_costs_one() {
        let prefix = quick_fox();
        let model = CostModel::new(&prefix, 10, &Cubic);
        assert_eq!(model.slack(1, 2), Some(1));
        assert_eq!(model.penalty(1, 2), Some(1));
        assert_eq!(model.penalty(1, 1), Some(343));
    }

    #[test]
    fn overfull_line_is_infeasible() {
        let prefix = quick_fox();
        let model = CostModel::new(&prefix, 10, &Cubic);
        assert_eq!(model.slack(1, 3), None);
        assert_eq!(model.penalty(1, 3), None);
        // Infeasibility wins over the free final line.
        assert_eq!(model.penalty(2, 4), None);
    }

    #[test]
    fn final_line_is_free_regardless_of_slack() {
        let prefix = quick_fox();
        let model = CostModel::new(&prefix, 10, &Cubic);
        assert_eq!(model.slack(4, 4), Some(7));
        assert_eq!(model.penalty(4, 4), Some(0));
        assert_eq!(model.penalty(3, 4), Some(0));
    }

    #[test]
    fn exact_fit_costs_nothing() {
        let prefix = PrefixLengths::new(&["abcd", "ef", "x"]);
        let model = CostModel::new(&prefix, 7, &Cubic);
        assert_eq!(model.slack(1, 2), Some(0));
        assert_eq!(model.penalty(1, 2), Some(0));
    }

    #[test]
    fn widest_width_does_not_wrap() {
        let prefix = PrefixLengths::new(&["a", "b", "c"]);
        let model = CostModel::new(&prefix, usize::MAX, &Cubic);
        assert_eq!(model.slack(1, 3), Some(usize::MAX - 5));
        assert_eq!(model.penalty(1, 3), Some(0));
        assert_eq!(model.penalty(1, 2), Some(u64::MAX));
    }

    #[test]
    fn custom_badness_is_used_for_inner_lines_only() {
        let prefix = quick_fox();
        let linear = |s: u64| s;
        let model = CostModel::new(&prefix, 10, &linear);
        assert_eq!(model.penalty(1, 1), Some(7));
        assert_eq!(model.penalty(4, 4), Some(0));
    }
}
