//! Entry point tying the resolution components together.

use crate::config::ResolverConfig;
use crate::entry::PoolEntry;
use crate::env::RewardEnv;
use crate::forbid;
use crate::kinds::{HandlerRegistry, ValidityContext};
use crate::reward::{self, ResolveContext, ResolvedReward};
use crate::world::WorldId;

/// Resolves pool entries against a fixed set of oracles, handlers and config.
///
/// The engine is stateless: every call is a pure function of its arguments
/// and the injected oracles, so one engine can serve any number of threads.
#[derive(Clone, Copy)]
pub struct RewardEngine<'a> {
    env: RewardEnv<'a>,
    handlers: &'a HandlerRegistry,
    config: &'a ResolverConfig,
}

impl<'a> RewardEngine<'a> {
    pub fn new(
        env: RewardEnv<'a>,
        handlers: &'a HandlerRegistry,
        config: &'a ResolverConfig,
    ) -> Self {
        Self {
            env,
            handlers,
            config,
        }
    }

    pub fn env(&self) -> RewardEnv<'a> {
        self.env
    }

    pub fn handlers(&self) -> &'a HandlerRegistry {
        self.handlers
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// Materializes `entry` into a concrete reward.
    ///
    /// With `target_worth`, the amount is chosen to approach that worth;
    /// otherwise it is sampled. Never fails.
    pub fn resolve(
        &self,
        entry: &PoolEntry,
        ctx: &ResolveContext,
        target_worth: Option<f64>,
    ) -> ResolvedReward {
        reward::resolve(entry, &self.env, self.config, ctx, target_worth)
    }

    /// Returns true if `entry`'s handler accepts it in `world`.
    pub fn is_valid(&self, entry: &PoolEntry, world: WorldId) -> bool {
        let ctx = ValidityContext::new(world, self.env, self.config);
        self.handlers.is_valid(entry, &ctx)
    }

    /// Returns true if `entry` refuses to share a set with `other`.
    ///
    /// One-directional; see [`forbid::conflicts`].
    pub fn conflicts(&self, world: WorldId, entry: &PoolEntry, other: &PoolEntry) -> bool {
        forbid::conflicts(entry, other, world, self.env.tags(), self.config)
    }

    /// Returns true if `entry` conflicts with any of `candidates`.
    pub fn conflicts_with_any<'e, I>(&self, world: WorldId, entry: &PoolEntry, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'e PoolEntry>,
    {
        forbid::conflicts_with_any(entry, candidates, world, self.env.tags(), self.config)
    }

    /// Distance of `value` from `entry`'s worth range.
    pub fn worth_distance(&self, entry: &PoolEntry, value: f64) -> i32 {
        entry.worth_distance_from(value)
    }
}
