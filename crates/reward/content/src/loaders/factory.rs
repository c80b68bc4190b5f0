//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use reward_core::ResolverConfig;
use tracing::debug;

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TagLoader};
use crate::oracle::{ItemTable, RewardContent, TagTable};

/// Content factory that loads all reward content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── tags.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TAGS_FILE: &'static str = "tags.ron";
    pub const ITEMS_FILE: &'static str = "items.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load resolver configuration from `config.toml`.
    ///
    /// A missing file yields [`ResolverConfig::default`]; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<ResolverConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            debug!(
                target: "reward_content::loaders",
                path = %path.display(),
                "No config file, using defaults"
            );
            return Ok(ResolverConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load tag membership from `tags.ron`.
    pub fn load_tags(&self) -> LoadResult<TagTable> {
        TagLoader::load(&self.data_dir.join(Self::TAGS_FILE))
    }

    /// Load the item registry from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemTable> {
        ItemLoader::load(&self.data_dir.join(Self::ITEMS_FILE))
    }

    /// Load config, tags and items together.
    pub fn load(&self) -> LoadResult<RewardContent> {
        let content = RewardContent::new(self.load_config()?, self.load_tags()?, self.load_items()?);
        debug!(
            target: "reward_content::loaders",
            data_dir = %self.data_dir.display(),
            tags = content.tags.len(),
            items = content.items.len(),
            "Loaded reward content"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
