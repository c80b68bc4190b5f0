use crate::world::WorldId;

/// Tag-membership source.
///
/// Lookups are expected to be in-memory reads against already-loaded
/// registry state. Member order must be stable between calls so that a
/// seeded pick is reproducible.
pub trait TagOracle: Send + Sync {
    /// Returns the identities belonging to `tag` in `world` (possibly empty).
    fn members_of(&self, tag: &str, world: WorldId) -> Vec<String>;
}
