//! Pluggable entry kinds.
//!
//! Each entry type is governed by an [`EntryHandler`] registered in a
//! [`HandlerRegistry`] under its type key. New reward kinds register a
//! handler; the engine never matches on kinds beyond the two built-ins that
//! carry tag semantics.
//!
//! # Failure Policy
//!
//! Validity is a pure boolean gate. A missing handler, a handler error and a
//! handler panic all become `false` plus a warning; nothing propagates.

mod item;
mod item_tag;
mod registry;

pub use item::ItemHandler;
pub use item_tag::ItemTagHandler;
pub use registry::HandlerRegistry;

use crate::config::ResolverConfig;
use crate::entry::PoolEntry;
use crate::env::{OracleError, RewardEnv};
use crate::error::{ErrorSeverity, RewardError};
use crate::world::WorldId;

/// Everything a handler may consult while checking an entry.
#[derive(Clone, Copy)]
pub struct ValidityContext<'a> {
    pub world: WorldId,
    pub env: RewardEnv<'a>,
    pub config: &'a ResolverConfig,
}

impl<'a> ValidityContext<'a> {
    pub fn new(world: WorldId, env: RewardEnv<'a>, config: &'a ResolverConfig) -> Self {
        Self { world, env, config }
    }
}

/// Reasons a handler rejects or fails to check an entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("entry content is blank")]
    BlankContent,

    #[error("item '{0}' is not registered")]
    UnknownItem(String),

    #[error("tag '{0}' has no members")]
    EmptyTag(String),

    /// Failure reported by a custom handler.
    #[error("{kind} handler failed: {message}")]
    Handler { kind: String, message: String },
}

impl RewardError for EntryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EntryError::Oracle(e) => e.severity(),
            EntryError::BlankContent | EntryError::UnknownItem(_) | EntryError::EmptyTag(_) => {
                ErrorSeverity::Configuration
            }
            EntryError::Handler { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EntryError::Oracle(e) => e.error_code(),
            EntryError::BlankContent => "ENTRY_BLANK_CONTENT",
            EntryError::UnknownItem(_) => "ENTRY_UNKNOWN_ITEM",
            EntryError::EmptyTag(_) => "ENTRY_EMPTY_TAG",
            EntryError::Handler { .. } => "ENTRY_HANDLER_FAILED",
        }
    }
}

/// Capability attached to one entry type.
///
/// Handlers are shared across threads and must not keep per-call state.
pub trait EntryHandler: Send + Sync {
    /// Type key this handler governs; doubles as the handler's identity.
    fn kind(&self) -> &str;

    /// Checks whether `entry` can be used in `ctx`.
    ///
    /// Returning `Ok(false)` rejects silently; an `Err` rejects with a
    /// reason that is logged by the registry.
    fn is_valid(&self, entry: &PoolEntry, ctx: &ValidityContext<'_>) -> Result<bool, EntryError>;
}
