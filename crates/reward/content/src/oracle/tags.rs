//! In-memory [`reward_core::TagOracle`] with per-world overrides.
use std::collections::HashMap;

use reward_core::{TagOracle, WorldId};

/// Tag membership table.
///
/// A world override replaces the global membership of that tag entirely; it
/// does not merge with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagTable {
    global: HashMap<String, Vec<String>>,
    per_world: HashMap<WorldId, HashMap<String, Vec<String>>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global members of `tag`, replacing any previous members.
    pub fn insert(&mut self, tag: impl Into<String>, members: Vec<String>) {
        self.global.insert(tag.into(), dedup(members));
    }

    /// Sets the members of `tag` inside `world` only.
    pub fn insert_for(&mut self, world: WorldId, tag: impl Into<String>, members: Vec<String>) {
        self.per_world
            .entry(world)
            .or_default()
            .insert(tag.into(), dedup(members));
    }

    /// Members of `tag` in `world`, or `None` if the tag is unknown there.
    pub fn members(&self, tag: &str, world: WorldId) -> Option<&[String]> {
        self.per_world
            .get(&world)
            .and_then(|tags| tags.get(tag))
            .or_else(|| self.global.get(tag))
            .map(Vec::as_slice)
    }

    /// Global tag names, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.global.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.per_world.is_empty()
    }

    #[cfg(feature = "loaders")]
    pub(crate) fn from_parts(
        global: std::collections::BTreeMap<String, Vec<String>>,
        worlds: std::collections::BTreeMap<u32, std::collections::BTreeMap<String, Vec<String>>>,
    ) -> Self {
        let mut table = Self::new();
        for (tag, members) in global {
            table.insert(tag, members);
        }
        for (world, tags) in worlds {
            for (tag, members) in tags {
                table.insert_for(WorldId(world), tag, members);
            }
        }
        table
    }
}

impl TagOracle for TagTable {
    fn members_of(&self, tag: &str, world: WorldId) -> Vec<String> {
        self.members(tag, world).map(<[String]>::to_vec).unwrap_or_default()
    }
}

// Drops repeats, keeping first-occurrence order.
fn dedup(members: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(members.len());
    for member in members {
        if !out.contains(&member) {
            out.push(member);
        }
    }
    out
}
