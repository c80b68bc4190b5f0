//! Traits describing read-only registry data.
//!
//! Oracles expose tag membership, the item registry and the random source.
//! The [`Env`] aggregate bundles them so resolution can reach everything it
//! needs without hard coupling to concrete implementations.
mod error;
mod items;
mod rng;
mod tags;

pub use error::OracleError;
pub use items::ItemOracle;
pub use rng::{PcgRng, RngOracle, RollSlot, compute_seed};
pub use tags::TagOracle;

/// Aggregates read-only oracles required by resolution and validity checks.
///
/// Tags and the random source are always required. The item registry is
/// optional: only handlers that check literal item identities need it.
pub struct Env<'a, T, I, R>
where
    T: TagOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    tags: &'a T,
    items: Option<&'a I>,
    rng: &'a R,
}

// Manual impls: derives would require the (often unsized) oracles to be Clone.
impl<T, I, R> Clone for Env<'_, T, I, R>
where
    T: TagOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I, R> Copy for Env<'_, T, I, R>
where
    T: TagOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type RewardEnv<'a> = Env<'a, dyn TagOracle + 'a, dyn ItemOracle + 'a, dyn RngOracle + 'a>;

impl<'a, T, I, R> Env<'a, T, I, R>
where
    T: TagOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(tags: &'a T, items: Option<&'a I>, rng: &'a R) -> Self {
        Self { tags, items, rng }
    }

    pub fn with_all(tags: &'a T, items: &'a I, rng: &'a R) -> Self {
        Self::new(tags, Some(items), rng)
    }

    pub fn tags(&self) -> &'a T {
        self.tags
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}

impl<'a, T, I, R> Env<'a, T, I, R>
where
    T: TagOracle + 'a,
    I: ItemOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `RewardEnv`.
    pub fn as_reward_env(&self) -> RewardEnv<'a> {
        let tags: &'a dyn TagOracle = self.tags;
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as &'a dyn ItemOracle);
        let rng: &'a dyn RngOracle = self.rng;
        Env::new(tags, items, rng)
    }
}
