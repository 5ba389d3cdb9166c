//! Optimal paragraph formatting by dynamic programming.
//!
//! Given a sequence of words and a maximum line width `M`, this crate breaks
//! the words into lines so that the total penalty over all lines is minimal.
//! A non-final line with `s` unused trailing columns costs `s³`; the final
//! line is free. Words are placed left-justified with single spaces.
//!
//! ## Core idea
//! 1. Build prefix sums of word lengths so any line's width is O(1).
//! 2. Fill `c[j]`, the cheapest way to set the first `j` words, left to right:
//!    `c[j] = min_i c[i-1] + penalty(i, j)`, remembering the best `i` in `p[j]`.
//! 3. Walk `p` backwards from the last word to recover the lines.
//!
//! Only starts `i` within `ceil((M+1)/2)` words of `j` can fit on a line, so
//! the DP runs in O(n·M) time.
//!
//! ## Quick start
//! ```
//! use para_dp::format;
//!
//! let words = ["The", "quick", "brown", "fox"];
//! let partition = format(&words, 10).unwrap();
//! assert_eq!(partition.total_cost(), 1);
//!
//! let lines: Vec<String> = partition.lines(&words).unwrap().into_iter().map(|l| l.text).collect();
//! assert_eq!(lines, ["The quick", "brown fox"]);
//! ```
//!
//! ## Configuration
//! [`PartitionerBuilder`] selects the badness function (any [`Badness`]),
//! the search window ([`WindowMode`]) and caller-level input [`Limits`].

pub mod builder;
pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod layout;
pub mod prefix;
pub mod traits;
pub mod utils;
pub mod words;

pub use crate::builder::PartitionerBuilder;
pub use crate::config::{Limits, WindowMode};
pub use crate::engine::{format, Partitioner};
pub use crate::error::FormatError;
pub use crate::layout::{Line, Partition};
pub use crate::traits::{Badness, Cubic};
