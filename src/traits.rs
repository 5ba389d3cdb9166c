//! Trait seam for the line badness function.
//!
//! The cost model decides *whether* a candidate line is allowed and whether it
//! is the free final line. Everything else is delegated to a [`Badness`]
//! implementation, which maps the number of blank trailing columns on a
//! non-final line to a penalty.
//!
//! Implementations should be non-decreasing in `slack` so that looser lines
//! never look cheaper than tighter ones; the partitioner does not rely on this
//! for correctness, only the quality of the result does.

/// Penalty for a non-final line with `slack` unused columns.
pub trait Badness {
    fn badness(&self, slack: u64) -> u64;
}

/// Classic cubic badness: `slack³`. Saturates instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl Badness for Cubic {
    #[inline]
    fn badness(&self, slack: u64) -> u64 {
        slack.saturating_pow(3)
    }
}

impl<F> Badness for F
where
    F: Fn(u64) -> u64,
{
    #[inline]
    fn badness(&self, slack: u64) -> u64 {
        self(slack)
    }
}

#[cfg(test)]
mod tests {
    use super::{Badness, Cubic};

    #[test]
    fn cubic_values() {
        assert_eq!(Cubic.badness(0), 0);
        assert_eq!(Cubic.badness(1), 1);
        assert_eq!(Cubic.badness(7), 343);
        assert_eq!(Cubic.badness(u64::MAX), u64::MAX);
    }

    #[test]
    fn closures_are_badness() {
        let square = |s: u64| s * s;
        assert_eq!(square.badness(4), 16);
        let offset = |s: u64| s + 100;
        assert_eq!(offset.badness(0), 100);
    }
}
