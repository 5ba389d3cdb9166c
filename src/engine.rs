//! Optimal partitioner: the dynamic program over line endings.
//!
//! For `j = 1..=num`, `c[j]` is the cheapest way to typeset the first `j`
//! words:
//!
//! ```text
//! c[0] = 0
//! c[j] = min over feasible i of c[i - 1] + penalty(i, j)
//! p[j] = the smallest i reaching that minimum
//! ```
//!
//! Entries depend only on smaller indices, so the tables are filled strictly
//! left to right and never revisited. The candidate window for `i` is
//! controlled by [`WindowMode`]; both modes return identical tables.

use crate::config::{Limits, WindowMode};
use crate::cost::CostModel;
use crate::error::FormatError;
use crate::layout::Partition;
use crate::prefix::PrefixLengths;
use crate::traits::{Badness, Cubic};
use crate::utils::window_start;
use crate::words::validate;

/// Minimum-raggedness line breaker for a fixed width.
///
/// Typical usage:
/// ```
/// use para_dp::Partitioner;
///
/// let words = ["The", "quick", "brown", "fox"];
/// let partitioner = Partitioner::new(10).unwrap();
/// let partition = partitioner.run(&words).unwrap();
/// assert_eq!(partition.total_cost(), 1);
/// for line in partition.lines(&words).unwrap() {
///     println!("{}:({})\t{}", line.number, line.len, line.text);
/// }
/// ```
///
/// A partitioner holds configuration only. Each [`run`](Self::run) builds its
/// own prefix, cost and break tables, so one instance can be reused for any
/// number of independent inputs.
#[derive(Debug, Clone)]
pub struct Partitioner<B: Badness = Cubic> {
    width: usize,
    window: WindowMode,
    limits: Limits,
    badness: B,
}

impl Partitioner<Cubic> {
    /// Create a partitioner with cubic badness, a pruned window and no limits.
    pub fn new(width: usize) -> Result<Self, FormatError> {
        Self::with_parts(width, WindowMode::default(), Limits::default(), Cubic)
    }
}

impl<B: Badness> Partitioner<B> {
    pub(crate) fn with_parts(
        width: usize,
        window: WindowMode,
        limits: Limits,
        badness: B,
    ) -> Result<Self, FormatError> {
        if width < 1 {
            return Err(FormatError::InvalidWidth { width });
        }
        Ok(Self {
            width,
            window,
            limits,
            badness,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn window(&self) -> WindowMode {
        self.window
    }

    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[inline]
    pub fn badness(&self) -> &B {
        &self.badness
    }

    /// Validate `words`, then compute the optimal partition.
    ///
    /// Empty input is not an error: it yields a total cost of 0 and no lines.
    ///
    /// # Errors
    /// - [`FormatError::WordTooLong`] if some word alone exceeds the width,
    /// - any validation error from [`validate`].
    pub fn run<S: AsRef<str>>(&self, words: &[S]) -> Result<Partition, FormatError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("format", words = words.len(), width = self.width);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if let Err(err) = validate(words, &self.limits) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, "rejected input");
            return Err(err);
        }

        let prefix = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("prefix_lengths");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            PrefixLengths::new(words)
        };
        self.run_prefix(&prefix)
    }

    /// Run the DP over an already built prefix table.
    ///
    /// Skips word validation; the caller guarantees every word is non-empty.
    pub fn run_prefix(&self, prefix: &PrefixLengths) -> Result<Partition, FormatError> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_tables", words = prefix.num_words());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let model = CostModel::new(prefix, self.width, &self.badness);
        let num = prefix.num_words();
        let mut costs = vec![0u64; num + 1];
        let mut breaks = vec![0usize; num + 1];

        for j in 1..=num {
            let mut best: Option<(u64, usize)> = None;
            for i in window_start(j, self.width, self.window)..=j {
                let Some(lc) = model.penalty(i, j) else {
                    continue;
                };
                let cand = costs[i - 1].saturating_add(lc);
                if best.map_or(true, |(c, _)| cand < c) {
                    best = Some((cand, i));
                }
            }
            match best {
                Some((c, i)) => {
                    costs[j] = c;
                    breaks[j] = i;
                }
                None => {
                    let err = FormatError::WordTooLong {
                        index: j,
                        len: prefix.word_len(j),
                        width: self.width,
                    };
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%err, "no feasible line");
                    return Err(err);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(total = costs[num], "tables filled");

        Ok(Partition::new(self.width, costs, breaks))
    }
}

/// Format `words` at `width` with the default configuration.
///
/// Shorthand for `Partitioner::new(width)?.run(words)`.
pub fn format<S: AsRef<str>>(words: &[S], width: usize) -> Result<Partition, FormatError> {
    Partitioner::new(width)?.run(words)
}
