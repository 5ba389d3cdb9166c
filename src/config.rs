//! Tunables for a formatting run.
//!
//! None of these change the optimal answer. [`Limits`] rejects inputs a caller
//! considers too large, [`WindowMode`] trades clarity for speed in the DP.

/// Caller-level bounds on the input.
///
/// The algorithm itself is correct for any number of words of any length;
/// limits exist so a caller can refuse oversized input up front instead of
/// truncating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    /// Maximum number of words accepted, if any.
    pub max_words: Option<usize>,
    /// Maximum length of a single word in chars, if any.
    pub max_word_len: Option<usize>,
}

impl Limits {
    /// Word count ceiling used by the classic `prettyprint` tool.
    pub const REFERENCE_MAX_WORDS: usize = 2048;
    /// Word length ceiling used by the classic `prettyprint` tool.
    pub const REFERENCE_MAX_WORD_LEN: usize = 30;

    /// No limits at all. Same as `Limits::default()`.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The bounds of the classic `prettyprint` tool: 2048 words of at most
    /// 30 chars each.
    pub fn reference() -> Self {
        Self {
            max_words: Some(Self::REFERENCE_MAX_WORDS),
            max_word_len: Some(Self::REFERENCE_MAX_WORD_LEN),
        }
    }

    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = Some(max);
        self
    }

    pub fn with_max_word_len(mut self, max: usize) -> Self {
        self.max_word_len = Some(max);
        self
    }
}

/// How far back the DP looks for the start of a line ending at word `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Only consider starts that could possibly fit: a line of width `M`
    /// holds at most `ceil((M + 1) / 2)` words. O(n·M).
    #[default]
    Pruned,
    /// Consider every start `1..=j`. O(n²), identical results.
    Full,
}
