/// Resolver configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Identity handed out when an item entry points at a tag with no members.
    pub fallback_content: String,

    /// Prefix marking an item entry's content as a tag reference.
    pub tag_marker: char,
}

impl ResolverConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FALLBACK_CONTENT: &'static str = "minecraft:air";
    pub const DEFAULT_TAG_MARKER: char = '#';

    pub fn new() -> Self {
        Self {
            fallback_content: Self::DEFAULT_FALLBACK_CONTENT.to_owned(),
            tag_marker: Self::DEFAULT_TAG_MARKER,
        }
    }

    pub fn with_fallback_content(mut self, fallback_content: impl Into<String>) -> Self {
        self.fallback_content = fallback_content.into();
        self
    }

    pub fn with_tag_marker(mut self, tag_marker: char) -> Self {
        self.tag_marker = tag_marker;
        self
    }

    /// Returns the tag name when `content` carries the tag marker.
    pub fn strip_tag_marker<'c>(&self, content: &'c str) -> Option<&'c str> {
        content.strip_prefix(self.tag_marker)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
