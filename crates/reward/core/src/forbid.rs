//! Forbidden-pair evaluation.
//!
//! `conflicts(a, b)` only consults `a`'s forbidden list and `a`'s tag
//! membership. The relation is not symmetric; callers that need mutual
//! exclusion check both directions.

use crate::config::ResolverConfig;
use crate::content::related_items;
use crate::entry::PoolEntry;
use crate::env::TagOracle;
use crate::world::WorldId;

/// True if `entry` refuses to appear alongside `other`.
///
/// Either `entry` lists `other`'s `(type, content)` as forbidden, or `other`'s
/// content is a member of `entry`'s tag.
pub fn conflicts<T>(
    entry: &PoolEntry,
    other: &PoolEntry,
    world: WorldId,
    tags: &T,
    config: &ResolverConfig,
) -> bool
where
    T: TagOracle + ?Sized,
{
    if entry.forbids().iter().any(|forbidden| forbidden.matches(other)) {
        return true;
    }

    related_items(entry, world, tags, config)
        .is_some_and(|related| related.iter().any(|item| item == other.content()))
}

/// True if `entry` conflicts with any of `candidates`, stopping at the first hit.
pub fn conflicts_with_any<'e, T, I>(
    entry: &PoolEntry,
    candidates: I,
    world: WorldId,
    tags: &T,
    config: &ResolverConfig,
) -> bool
where
    T: TagOracle + ?Sized,
    I: IntoIterator<Item = &'e PoolEntry>,
{
    candidates
        .into_iter()
        .any(|other| conflicts(entry, other, world, tags, config))
}
