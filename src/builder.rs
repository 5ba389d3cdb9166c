use crate::config::{Limits, WindowMode};
use crate::error::FormatError;
use crate::traits::{Badness, Cubic};
use crate::Partitioner;

/// Step-by-step configuration of a [`Partitioner`].
///
/// ```
/// use para_dp::{Limits, PartitionerBuilder, WindowMode};
///
/// let partitioner = PartitionerBuilder::new(40)
///     .with_window(WindowMode::Full)
///     .with_limits(Limits::reference())
///     .with_badness(|slack: u64| slack * slack)
///     .build()
///     .unwrap();
/// assert_eq!(partitioner.width(), 40);
/// ```
pub struct PartitionerBuilder<B: Badness = Cubic> {
    width: usize,
    window: WindowMode,
    limits: Limits,
    badness: B,
}

impl PartitionerBuilder<Cubic> {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            window: WindowMode::default(),
            limits: Limits::default(),
            badness: Cubic,
        }
    }
}

impl<B: Badness> PartitionerBuilder<B> {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    pub fn with_window(mut self, window: WindowMode) -> Self {
        self.window = window;
        self
    }
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
    pub fn with_badness<B2: Badness>(self, badness: B2) -> PartitionerBuilder<B2> {
        PartitionerBuilder {
            width: self.width,
            window: self.window,
            limits: self.limits,
            badness,
        }
    }
    /// Fails with [`FormatError::InvalidWidth`] if the width is zero.
    pub fn build(self) -> Result<Partitioner<B>, FormatError> {
        Partitioner::with_parts(self.width, self.window, self.limits, self.badness)
    }
}
