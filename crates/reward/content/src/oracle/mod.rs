//! Static reward content exposed through `reward-core` oracle traits.
//!
//! [`RewardContent`] bundles the tables with the resolver configuration so a
//! [`RewardEngine`] can be built on demand. The data is immutable once loaded.
mod items;
mod tags;

use reward_core::{Env, HandlerRegistry, PcgRng, ResolverConfig, RewardEngine, RewardEnv};

pub use items::ItemTable;
pub use tags::TagTable;

/// Everything an engine borrows, owned in one place.
#[derive(Clone, Debug, Default)]
pub struct RewardContent {
    pub config: ResolverConfig,
    pub tags: TagTable,
    pub items: ItemTable,
    rng: PcgRng,
}

impl RewardContent {
    pub fn new(config: ResolverConfig, tags: TagTable, items: ItemTable) -> Self {
        Self {
            config,
            tags,
            items,
            rng: PcgRng,
        }
    }

    pub fn as_reward_env(&self) -> RewardEnv<'_> {
        Env::with_all(&self.tags, &self.items, &self.rng).as_reward_env()
    }

    /// Builds an engine over this content and `handlers`.
    pub fn engine<'a>(&'a self, handlers: &'a HandlerRegistry) -> RewardEngine<'a> {
        RewardEngine::new(self.as_reward_env(), handlers, &self.config)
    }
}
