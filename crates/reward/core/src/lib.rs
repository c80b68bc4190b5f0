//! Pool entry resolution shared by reward generators.
//!
//! `reward-core` turns reward templates ([`PoolEntry`]) into concrete rewards
//! and answers the questions a generator asks before committing to one: is
//! the entry usable, and does it clash with entries already picked. External
//! data (tag membership, the item registry, randomness) is reached through
//! the oracles in [`env`]; [`engine::RewardEngine`] bundles them with the
//! handler registry and configuration.
pub mod amount;
pub mod config;
pub mod content;
pub mod engine;
pub mod entry;
pub mod env;
pub mod error;
pub mod forbid;
pub mod kinds;
pub mod reward;
pub mod world;
pub mod worth;

pub use config::ResolverConfig;
pub use content::ContentRef;
pub use engine::RewardEngine;
pub use entry::{
    DecodeError, EntryFormatError, EntryRange, EntryType, ForbiddenContent, PoolEntry,
    PoolEntryBuilder, RangeError, Rarity,
};
pub use env::{
    Env, ItemOracle, OracleError, PcgRng, RewardEnv, RngOracle, RollSlot, TagOracle, compute_seed,
};
pub use error::{ErrorSeverity, RewardError};
pub use kinds::{
    EntryError, EntryHandler, HandlerRegistry, ItemHandler, ItemTagHandler, ValidityContext,
};
pub use reward::{ResolveContext, ResolvedReward};
pub use world::{BlockPos, WorldId};
pub use worth::{WorthBounds, worth_bounds, worth_distance, worth_steps};
