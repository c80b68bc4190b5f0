//! Resolver configuration loader.

use std::path::Path;

use reward_core::ResolverConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for resolver configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`ResolverConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<ResolverConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ResolverConfig> {
        let config: ResolverConfig = toml::from_str(content)?;
        if config.fallback_content.trim().is_empty() {
            anyhow::bail!("fallback_content must not be blank");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("tag_marker = \"$\"\n").unwrap();
        assert_eq!(config.tag_marker, '$');
        assert_eq!(config.fallback_content, "minecraft:air");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ResolverConfig::default());
    }

    #[test]
    fn blank_fallback_is_rejected() {
        assert!(ConfigLoader::parse("fallback_content = \" \"\n").is_err());
    }

    #[test]
    fn multi_char_marker_is_rejected() {
        assert!(ConfigLoader::parse("tag_marker = \"##\"\n").is_err());
    }
}
