//! Item registry loader.

use std::path::Path;

use tracing::warn;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::ItemTable;

/// Loader for the item registry from RON files.
///
/// The file is a plain list of identities: `["minecraft:stone", ...]`.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<ItemTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item list RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ItemTable> {
        let items: Vec<String> = ron::from_str(content)?;

        let mut table = ItemTable::new();
        for item in items {
            if item.trim().is_empty() {
                anyhow::bail!("item list contains a blank identity");
            }
            if !table.insert(item.as_str()) {
                warn!(target: "reward_content::loaders", item = %item, "Duplicate item identity");
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use reward_core::ItemOracle;

    use super::*;

    #[test]
    fn parses_item_list() {
        let table =
            ItemLoader::parse(r#"["minecraft:stone", "minecraft:apple", "minecraft:stone"]"#)
                .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains("minecraft:apple"));
    }

    #[test]
    fn blank_identity_is_rejected() {
        assert!(ItemLoader::parse(r#"["minecraft:stone", ""]"#).is_err());
    }
}
