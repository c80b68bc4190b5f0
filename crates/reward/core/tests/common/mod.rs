#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Once;

use reward_core::{
    Env, HandlerRegistry, ItemOracle, PcgRng, ResolverConfig, RewardEngine, TagOracle, WorldId,
};

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Tag table with optional per-world overrides.
#[derive(Default)]
pub struct Tags {
    global: HashMap<String, Vec<String>>,
    per_world: HashMap<(WorldId, String), Vec<String>>,
}

impl Tags {
    pub fn with(mut self, tag: &str, members: &[&str]) -> Self {
        self.global.insert(tag.to_owned(), owned(members));
        self
    }

    pub fn with_in(mut self, world: WorldId, tag: &str, members: &[&str]) -> Self {
        self.per_world.insert((world, tag.to_owned()), owned(members));
        self
    }
}

impl TagOracle for Tags {
    fn members_of(&self, tag: &str, world: WorldId) -> Vec<String> {
        self.per_world
            .get(&(world, tag.to_owned()))
            .or_else(|| self.global.get(tag))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct Items(HashSet<String>);

impl Items {
    pub fn with(mut self, items: &[&str]) -> Self {
        self.0.extend(owned(items));
        self
    }
}

impl ItemOracle for Items {
    fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Owns every collaborator an engine borrows.
pub struct Fixture {
    pub tags: Tags,
    pub items: Items,
    pub rng: PcgRng,
    pub handlers: HandlerRegistry,
    pub config: ResolverConfig,
}

impl Fixture {
    pub fn new(tags: Tags, items: Items) -> Self {
        init_tracing();
        Self {
            tags,
            items,
            rng: PcgRng,
            handlers: HandlerRegistry::builtin(),
            config: ResolverConfig::default(),
        }
    }

    pub fn engine(&self) -> RewardEngine<'_> {
        let env = Env::with_all(&self.tags, &self.items, &self.rng).as_reward_env();
        RewardEngine::new(env, &self.handlers, &self.config)
    }
}
