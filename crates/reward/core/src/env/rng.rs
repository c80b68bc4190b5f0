//! RNG oracle for deterministic random number generation.
//!
//! Resolution draws from an injected [`RngOracle`] instead of a global
//! generator. Every draw is keyed by an explicit seed, so a resolution call is
//! reproducible given the same seed and safe to run from several threads.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same value.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Returns `min` when the range is degenerate (`min >= max`).
    fn range(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64) as u64 + 1;
        let offset = self.next_u32(seed) as u64 % span;
        (min as i64 + offset as i64) as i32
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// `len` must be non-zero; callers handle the empty case themselves.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called on an empty collection");
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as u64 % len as u64) as usize
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It is stateless: the seed is the state, so one instance can
/// be shared freely across threads.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Independent random draws made while resolving a single entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollSlot {
    /// Amount sampled from the entry's range.
    Amount = 0,
    /// Member picked from a tag group.
    Content = 1,
}

/// Compute a deterministic seed for one draw.
///
/// # Arguments
///
/// * `seed` - Base seed chosen by the caller for the generation session
/// * `nonce` - Sequence number of the resolution within the session
/// * `slot` - Which draw of the resolution this seed feeds
pub fn compute_seed(seed: u64, nonce: u64, slot: RollSlot) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
