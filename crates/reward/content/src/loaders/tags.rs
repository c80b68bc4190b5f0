//! Tag membership loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::TagTable;

/// Tag catalog structure for RON files.
///
/// ```ron
/// (
///     tags: {
///         "c:ores": ["minecraft:iron_ore", "minecraft:gold_ore"],
///     },
///     worlds: {
///         1: { "c:ores": ["minecraft:nether_gold_ore"] },
///     },
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagCatalog {
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    /// Overrides keyed by numeric world id.
    #[serde(default)]
    pub worlds: BTreeMap<u32, BTreeMap<String, Vec<String>>>,
}

/// Loader for tag membership from RON files.
pub struct TagLoader;

impl TagLoader {
    pub fn load(path: &Path) -> LoadResult<TagTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tag catalog RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TagTable> {
        let catalog: TagCatalog = ron::from_str(content)?;

        for (tag, members) in &catalog.tags {
            if members.is_empty() {
                warn!(
                    target: "reward_content::loaders",
                    tag = %tag,
                    "Tag declared without members; entries using it will fall back"
                );
            }
        }

        Ok(TagTable::from_parts(catalog.tags, catalog.worlds))
    }
}

#[cfg(test)]
mod tests {
    use reward_core::{TagOracle, WorldId};

    use super::*;

    #[test]
    fn parses_global_and_world_tags() {
        let table = TagLoader::parse(
            r#"(
                tags: {
                    "c:ores": ["minecraft:iron_ore", "minecraft:gold_ore"],
                    "c:empty": [],
                },
                worlds: {
                    1: { "c:ores": ["minecraft:nether_gold_ore"] },
                },
            )"#,
        )
        .unwrap();

        assert_eq!(table.tags(), vec!["c:empty", "c:ores"]);
        assert_eq!(
            table.members_of("c:ores", WorldId::OVERWORLD),
            vec!["minecraft:iron_ore", "minecraft:gold_ore"]
        );
        assert_eq!(
            table.members_of("c:ores", WorldId(1)),
            vec!["minecraft:nether_gold_ore"]
        );
        assert!(table.members_of("c:empty", WorldId::OVERWORLD).is_empty());
    }

    #[test]
    fn worlds_section_is_optional() {
        let table = TagLoader::parse(r#"(tags: { "c:gems": ["minecraft:diamond"] })"#).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        assert!(TagLoader::parse("(tags: [1, 2])").is_err());
    }
}
