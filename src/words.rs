//! Input words: tokenisation and validation.
//!
//! The partitioner borrows a caller-owned slice of words. Before the DP runs
//! the slice is checked for malformed entries (empty strings, embedded
//! whitespace) and against the caller's [`Limits`]. Nothing is ever truncated.

use crate::config::Limits;
use crate::error::FormatError;
use crate::utils::word_len;

/// Split raw text into words on any Unicode whitespace.
///
/// ```
/// let words = para_dp::words::split_words("  The quick\n\tbrown fox ");
/// assert_eq!(words, ["The", "quick", "brown", "fox"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Check that `words` is a well-formed word sequence within `limits`.
///
/// Errors name the first offending word (1-based). The word-count limit is
/// checked before any individual word.
pub fn validate<S: AsRef<str>>(words: &[S], limits: &Limits) -> Result<(), FormatError> {
    if let Some(max) = limits.max_words {
        if words.len() > max {
            return Err(FormatError::TooManyWords {
                count: words.len(),
                max,
            });
        }
    }
    for (idx, w) in words.iter().enumerate() {
        let index = idx + 1;
        let w = w.as_ref();
        if w.is_empty() {
            return Err(FormatError::EmptyWord { index });
        }
        if w.chars().any(char::is_whitespace) {
            return Err(FormatError::WhitespaceInWord { index });
        }
        if let Some(max) = limits.max_word_len {
            let len = word_len(w);
            if len > max {
                return Err(FormatError::WordExceedsLimit { index, len, max });
            }
        }
    }
    Ok(())
}
