//! Resolved rewards: the concrete output of resolving a pool entry.

use tracing::debug;

use crate::amount::resolve_amount;
use crate::config::ResolverConfig;
use crate::content::resolve_content;
use crate::entry::{EntryType, PoolEntry, Rarity};
use crate::env::{RewardEnv, RollSlot, compute_seed};
use crate::world::{BlockPos, WorldId};

/// Where and with which seed a resolution happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResolveContext {
    pub world: WorldId,
    pub origin: BlockPos,
    /// Base seed of the generation session.
    pub seed: u64,
    /// Sequence number of this resolution within the session.
    pub nonce: u64,
}

impl ResolveContext {
    pub const fn new(world: WorldId, origin: BlockPos) -> Self {
        Self {
            world,
            origin,
            seed: 0,
            nonce: 0,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Seed for one draw of this resolution.
    pub fn seed_for(&self, slot: RollSlot) -> u64 {
        compute_seed(self.seed, self.nonce, slot)
    }
}

/// Concrete, fully-specified reward produced from a [`PoolEntry`].
///
/// `content` is never a tag-marked reference for `item` entries. Mystery
/// rewards are resolved like any other; `mystery` is always `false` here and
/// replacing the content of a mystery reward is left to the consumer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedReward {
    pub entry_id: String,
    pub world: WorldId,
    pub origin: BlockPos,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub content: String,
    pub amount: i32,
    pub worth: f64,
    pub rarity: Rarity,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub nbt: Option<String>,
    pub conditions: Option<serde_json::Value>,
    pub mystery: bool,
}

/// Resolves `entry` into a reward.
///
/// Never fails. An empty tag yields the configured fallback identity.
pub fn resolve(
    entry: &PoolEntry,
    env: &RewardEnv<'_>,
    config: &ResolverConfig,
    ctx: &ResolveContext,
    target_worth: Option<f64>,
) -> ResolvedReward {
    let unit_worth = entry.unit_worth_or_default();
    let amount = resolve_amount(
        entry.amount_or_default(),
        unit_worth,
        target_worth,
        env.rng(),
        ctx.seed_for(RollSlot::Amount),
    );
    let content = resolve_content(
        entry,
        ctx.world,
        env.tags(),
        env.rng(),
        ctx.seed_for(RollSlot::Content),
        config,
    );

    debug!(
        target: "reward_core::reward",
        entry = entry.id(),
        %content,
        amount,
        target_worth,
        "Resolved pool entry"
    );

    ResolvedReward {
        entry_id: entry.id().to_owned(),
        world: ctx.world,
        origin: ctx.origin,
        kind: entry.kind().clone(),
        content,
        amount,
        worth: amount as f64 * unit_worth,
        rarity: entry.rarity(),
        name: entry.name().map(str::to_owned),
        icon: entry.icon().map(str::to_owned),
        nbt: entry.nbt().map(str::to_owned),
        conditions: entry.conditions().cloned(),
        mystery: false,
    }
}
