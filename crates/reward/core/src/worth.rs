//! Worth arithmetic over an amount range and a per-unit value.

use crate::entry::EntryRange;

/// Lowest and highest total worth an entry can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorthBounds {
    pub low: f64,
    pub high: f64,
}

impl WorthBounds {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// `low = min * unit_worth`, `high = max * unit_worth`, unrounded.
pub fn worth_bounds(range: EntryRange, unit_worth: f64) -> WorthBounds {
    WorthBounds {
        low: range.min() as f64 * unit_worth,
        high: range.max() as f64 * unit_worth,
    }
}

/// Worth of every amount in `range`, in ascending amount order.
pub fn worth_steps(range: EntryRange, unit_worth: f64) -> Vec<f64> {
    range.values().map(|i| i as f64 * unit_worth).collect()
}

/// Distance of `value` from the worth bounds.
///
/// Zero when `value` lies inside `[low, high]`; otherwise the smaller of the
/// two absolute distances, truncated toward zero.
pub fn worth_distance(range: EntryRange, unit_worth: f64, value: f64) -> i32 {
    let bounds = worth_bounds(range, unit_worth);
    if bounds.contains(value) {
        return 0;
    }
    let distance = (bounds.low - value).abs().min((bounds.high - value).abs());
    // `as` truncates toward zero and saturates
    distance as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i32, max: i32) -> EntryRange {
        EntryRange::new(min, max).unwrap()
    }

    #[test]
    fn bounds_scale_range_ends() {
        let bounds = worth_bounds(range(2, 5), 10.0);
        assert_eq!(bounds, WorthBounds { low: 20.0, high: 50.0 });
    }

    #[test]
    fn steps_cover_every_amount() {
        assert_eq!(worth_steps(range(2, 5), 10.0), vec![20.0, 30.0, 40.0, 50.0]);
        assert_eq!(worth_steps(range(3, 3), 1.5), vec![4.5]);
    }

    #[test]
    fn distance_is_zero_inside_bounds() {
        for value in [20.0, 23.0, 35.5, 50.0] {
            assert_eq!(worth_distance(range(2, 5), 10.0, value), 0);
        }
    }

    #[test]
    fn distance_truncates_toward_zero() {
        // 19.9 is 0.1 below the low bound
        assert_eq!(worth_distance(range(2, 5), 10.0, 19.9), 0);
        assert_eq!(worth_distance(range(2, 5), 10.0, 17.9), 2);
        assert_eq!(worth_distance(range(2, 5), 10.0, 57.6), 7);
    }

    #[test]
    fn distance_outside_is_positive_past_one_unit() {
        assert_eq!(worth_distance(range(1, 1), 100.0, 0.0), 100);
        assert_eq!(worth_distance(range(1, 1), 100.0, 350.0), 250);
    }

    #[test]
    fn negative_unit_worth_uses_nearest_bound() {
        // low/high swap order when the unit worth is negative
        let bounds = worth_bounds(range(1, 2), -10.0);
        assert_eq!(bounds.low, -10.0);
        assert_eq!(bounds.high, -20.0);
        assert_eq!(worth_distance(range(1, 2), -10.0, 0.0), 10);
    }
}
