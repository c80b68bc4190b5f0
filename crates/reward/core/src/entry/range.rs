use std::fmt;
use std::ops::RangeInclusive;

use crate::env::RngOracle;
use crate::error::{ErrorSeverity, RewardError};

/// Closed integer interval `[min, max]` with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryRange {
    min: i32,
    max: i32,
}

/// Errors raised while building an [`EntryRange`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range minimum {min} is greater than maximum {max}")]
    Inverted { min: i32, max: i32 },
}

impl RewardError for RangeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RangeError::Inverted { .. } => "RANGE_INVERTED",
        }
    }
}

impl EntryRange {
    /// Single-unit range `[1, 1]`.
    pub const ONE: Self = Self::single(1);

    /// Creates a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates the degenerate range `[value, value]`.
    pub const fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[inline]
    pub const fn min(&self) -> i32 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into the range.
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Every integer in the range, ascending.
    pub fn values(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Draws a uniformly distributed value in `[min, max]`.
    ///
    /// Deterministic when `min == max`.
    pub fn sample<R>(&self, rng: &R, seed: u64) -> i32
    where
        R: RngOracle + ?Sized,
    {
        rng.range(seed, self.min, self.max)
    }
}

impl Default for EntryRange {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for EntryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::env::{PcgRng, RollSlot, compute_seed};

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            EntryRange::new(5, 2),
            Err(RangeError::Inverted { min: 5, max: 2 })
        );
        assert!(EntryRange::new(2, 2).is_ok());
    }

    #[test]
    fn display_format() {
        let range = EntryRange::new(2, 5).unwrap();
        assert_eq!(range.to_string(), "[2 - 5]");
        assert_eq!(EntryRange::single(-1).to_string(), "[-1 - -1]");
    }

    #[test]
    fn sample_stays_in_range_and_reaches_every_value() {
        let range = EntryRange::new(2, 5).unwrap();
        let mut seen = BTreeSet::new();
        for seed in 0..1_000u64 {
            let value = range.sample(&PcgRng, compute_seed(seed, 0, RollSlot::Amount));
            assert!(range.contains(value), "{value} escaped {range}");
            seen.insert(value);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn single_value_range_is_deterministic() {
        let range = EntryRange::single(7);
        for seed in 0..50u64 {
            assert_eq!(range.sample(&PcgRng, seed), 7);
        }
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let range = EntryRange::new(2, 5).unwrap();
        assert_eq!(range.clamp(0), 2);
        assert_eq!(range.clamp(4), 4);
        assert_eq!(range.clamp(99), 5);
    }
}
