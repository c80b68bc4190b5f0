//! Content resolution: symbolic content references to concrete identities.

use tracing::warn;

use crate::config::ResolverConfig;
use crate::entry::PoolEntry;
use crate::env::{RngOracle, TagOracle};
use crate::world::WorldId;

/// How an entry's content string is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRef<'a> {
    /// Item entry naming a concrete identity.
    Item(&'a str),
    /// Item entry whose content carries the tag marker; resolves to one member.
    TaggedItem(&'a str),
    /// Item-tag entry; the whole content names a tag and is passed through.
    Tag(&'a str),
    /// Any other kind; content is passed through as-is.
    Opaque(&'a str),
}

impl<'a> ContentRef<'a> {
    pub fn of(entry: &'a PoolEntry, config: &ResolverConfig) -> Self {
        let content = entry.content();
        if entry.kind().is_item() {
            match config.strip_tag_marker(content) {
                Some(tag) => ContentRef::TaggedItem(tag),
                None => ContentRef::Item(content),
            }
        } else if entry.kind().is_item_tag() {
            ContentRef::Tag(content)
        } else {
            ContentRef::Opaque(content)
        }
    }

    /// Tag name whose members relate to this content, if the kind has one.
    ///
    /// Literal item identities are looked up as tags of the same name, so an
    /// item entry relates to nothing unless a tag shares its identity.
    pub fn related_tag(&self) -> Option<&'a str> {
        match *self {
            ContentRef::Item(tag) | ContentRef::TaggedItem(tag) | ContentRef::Tag(tag) => Some(tag),
            ContentRef::Opaque(_) => None,
        }
    }
}

/// Identities related to `entry` through tag membership.
///
/// `None` for kinds without tag semantics; otherwise the (possibly empty)
/// member list of the entry's tag.
pub fn related_items<T>(
    entry: &PoolEntry,
    world: WorldId,
    tags: &T,
    config: &ResolverConfig,
) -> Option<Vec<String>>
where
    T: TagOracle + ?Sized,
{
    let tag = ContentRef::of(entry, config).related_tag()?;
    Some(tags.members_of(tag, world))
}

/// Resolves `entry`'s content into the identity placed in the reward.
///
/// Tagged item content picks one member uniformly; an empty tag yields
/// [`ResolverConfig::fallback_content`] and a warning. Everything else is
/// returned verbatim.
pub fn resolve_content<T, R>(
    entry: &PoolEntry,
    world: WorldId,
    tags: &T,
    rng: &R,
    seed: u64,
    config: &ResolverConfig,
) -> String
where
    T: TagOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    match ContentRef::of(entry, config) {
        ContentRef::TaggedItem(tag) => {
            let mut members = tags.members_of(tag, world);
            if members.is_empty() {
                warn!(
                    target: "reward_core::content",
                    entry = entry.id(),
                    content = entry.content(),
                    %world,
                    fallback = %config.fallback_content,
                    "Pool entry tag has no members, using fallback"
                );
                return config.fallback_content.clone();
            }
            let index = rng.pick_index(seed, members.len());
            members.swap_remove(index)
        }
        ContentRef::Item(content) | ContentRef::Tag(content) | ContentRef::Opaque(content) => {
            content.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;
    use crate::entry::EntryType;
    use crate::env::{PcgRng, RollSlot, compute_seed};

    #[derive(Default)]
    struct Tags(HashMap<&'static str, Vec<String>>);

    impl Tags {
        fn with(mut self, tag: &'static str, members: &[&str]) -> Self {
            self.0
                .insert(tag, members.iter().map(|m| m.to_string()).collect());
            self
        }
    }

    impl TagOracle for Tags {
        fn members_of(&self, tag: &str, _world: WorldId) -> Vec<String> {
            self.0.get(tag).cloned().unwrap_or_default()
        }
    }

    fn entry(kind: &str, content: &str) -> PoolEntry {
        PoolEntry::builder(kind, content).build().unwrap()
    }

    #[test]
    fn classifies_content() {
        let config = ResolverConfig::default();
        assert_eq!(
            ContentRef::of(&entry(EntryType::ITEM, "#c:gems"), &config),
            ContentRef::TaggedItem("c:gems")
        );
        assert_eq!(
            ContentRef::of(&entry(EntryType::ITEM, "minecraft:stone"), &config),
            ContentRef::Item("minecraft:stone")
        );
        assert_eq!(
            ContentRef::of(&entry(EntryType::ITEM_TAG, "c:gems"), &config),
            ContentRef::Tag("c:gems")
        );
        assert_eq!(
            ContentRef::of(&entry("entity", "minecraft:zombie"), &config),
            ContentRef::Opaque("minecraft:zombie")
        );
    }

    #[test]
    fn tagged_item_picks_every_member_eventually() {
        let tags = Tags::default().with("group", &["a", "b", "c"]);
        let config = ResolverConfig::default();
        let entry = entry(EntryType::ITEM, "#group");

        let mut seen = BTreeSet::new();
        for seed in 0..300u64 {
            let seed = compute_seed(seed, 0, RollSlot::Content);
            let picked =
                resolve_content(&entry, WorldId::OVERWORLD, &tags, &PcgRng, seed, &config);
            assert!(["a", "b", "c"].contains(&picked.as_str()));
            seen.insert(picked);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_tag_falls_back() {
        let tags = Tags::default();
        let config = ResolverConfig::default();
        let entry = entry(EntryType::ITEM, "#empty");
        for seed in 0..10u64 {
            assert_eq!(
                resolve_content(&entry, WorldId::OVERWORLD, &tags, &PcgRng, seed, &config),
                "minecraft:air"
            );
        }
    }

    #[test]
    fn item_tag_content_stays_symbolic() {
        let tags = Tags::default().with("c:gems", &["minecraft:diamond"]);
        let config = ResolverConfig::default();
        let entry = entry(EntryType::ITEM_TAG, "c:gems");
        assert_eq!(
            resolve_content(&entry, WorldId::OVERWORLD, &tags, &PcgRng, 0, &config),
            "c:gems"
        );
        assert_eq!(
            related_items(&entry, WorldId::OVERWORLD, &tags, &config),
            Some(vec!["minecraft:diamond".to_owned()])
        );
    }

    #[test]
    fn other_kinds_have_no_related_items() {
        let tags = Tags::default().with("minecraft:zombie", &["x"]);
        let config = ResolverConfig::default();
        let entry = entry("entity", "minecraft:zombie");
        assert_eq!(related_items(&entry, WorldId::OVERWORLD, &tags, &config), None);
        assert_eq!(
            resolve_content(&entry, WorldId::OVERWORLD, &tags, &PcgRng, 0, &config),
            "minecraft:zombie"
        );
    }
}
