//! Data-driven reward content and loaders.
//!
//! This crate provides in-memory implementations of the `reward-core` oracles
//! and loaders for RON/TOML data files:
//! - Tag membership, with per-world overrides (RON)
//! - Item registry (RON)
//! - Resolver configuration (TOML)
//!
//! Content is consumed through oracles and never mutated after loading.

pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{ItemTable, RewardContent, TagTable};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult, TagCatalog, TagLoader};
