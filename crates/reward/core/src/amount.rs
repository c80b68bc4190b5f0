//! Amount resolution.
//!
//! The result is always inside the entry's amount range, whatever target worth
//! the caller asks for.

use crate::entry::EntryRange;
use crate::env::RngOracle;

/// Picks an amount from `range`.
///
/// With a target worth, the amount is the number of units needed to reach it
/// (`ceil(target / unit_worth)`, at least one). Without one, the amount is
/// sampled uniformly. Either way the result is clamped into `range`.
pub fn resolve_amount<R>(
    range: EntryRange,
    unit_worth: f64,
    target_worth: Option<f64>,
    rng: &R,
    seed: u64,
) -> i32
where
    R: RngOracle + ?Sized,
{
    let raw = match target_worth {
        // NaN casts to 0 and infinities saturate; the floor and clamp absorb both
        Some(worth) => ((worth / unit_worth).ceil() as i32).max(1),
        None => range.sample(rng, seed),
    };
    range.clamp(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, RollSlot, compute_seed};

    fn range(min: i32, max: i32) -> EntryRange {
        EntryRange::new(min, max).unwrap()
    }

    #[test]
    fn target_worth_is_inverted_and_rounded_up() {
        assert_eq!(resolve_amount(range(2, 5), 10.0, Some(23.0), &PcgRng, 0), 3);
        assert_eq!(resolve_amount(range(2, 5), 10.0, Some(40.0), &PcgRng, 0), 4);
    }

    #[test]
    fn target_worth_is_clamped_into_range() {
        assert_eq!(resolve_amount(range(2, 5), 10.0, Some(5.0), &PcgRng, 0), 2);
        assert_eq!(resolve_amount(range(2, 5), 10.0, Some(10_000.0), &PcgRng, 0), 5);
    }

    #[test]
    fn zero_target_floors_at_one_unit() {
        assert_eq!(resolve_amount(range(1, 10), 10.0, Some(0.0), &PcgRng, 0), 1);
    }

    #[test]
    fn single_unit_without_target_is_always_one() {
        for seed in 0..100u64 {
            assert_eq!(resolve_amount(range(1, 1), 100.0, None, &PcgRng, seed), 1);
        }
    }

    #[test]
    fn output_never_leaves_range() {
        let targets = [None, Some(0.0), Some(0.5), Some(33.3), Some(1e12), Some(f64::NAN)];
        for seed in 0..200u64 {
            for target in targets {
                let amount = resolve_amount(
                    range(3, 7),
                    2.5,
                    target,
                    &PcgRng,
                    compute_seed(seed, 0, RollSlot::Amount),
                );
                assert!((3..=7).contains(&amount), "{amount} for {target:?}");
            }
        }
    }
}
