//! Error taxonomy for formatting requests.
//!
//! The cost model never fails; it reports an infeasible candidate line as
//! `None`. The partitioner is the only place where infeasibility is turned
//! into a [`FormatError`]. Input validation (widths, malformed words, caller
//! limits) happens before the DP runs.

use thiserror::Error;

/// Reasons a formatting request can be rejected.
///
/// Word indices are 1-based, matching the conceptual layout of the word
/// sequence (index 0 is the empty-prefix sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A single word does not fit on a line of the requested width.
    #[error("word {index} has length {len}, which exceeds the line width {width}")]
    WordTooLong {
        index: usize,
        len: usize,
        width: usize,
    },

    /// The maximum line width must be at least one column.
    #[error("line width must be at least 1, got {width}")]
    InvalidWidth { width: usize },

    /// Empty strings are not words.
    #[error("word {index} is empty")]
    EmptyWord { index: usize },

    /// Words are already tokenised and must not contain whitespace.
    #[error("word {index} contains whitespace")]
    WhitespaceInWord { index: usize },

    /// The input holds more words than the configured limit allows.
    #[error("input has {count} words, limit is {max}")]
    TooManyWords { count: usize, max: usize },

    /// Lines were requested for a word slice other than the one partitioned.
    #[error("partition covers {expected} words, but {actual} were supplied")]
    WordCountMismatch { expected: usize, actual: usize },

    /// A word is longer than the configured per-word limit.
    #[error("word {index} has length {len}, limit is {max}")]
    WordExceedsLimit { index: usize, len: usize, max: usize },
}
