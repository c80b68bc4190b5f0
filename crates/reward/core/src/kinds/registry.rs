//! Handler registry keyed by entry type.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, warn};

use super::{EntryHandler, ItemHandler, ItemTagHandler, ValidityContext};
use crate::entry::{EntryType, PoolEntry};
use crate::error::RewardError;

/// Registry that maps entry types to their handlers.
///
/// Lookup is by the type key each handler reports through
/// [`EntryHandler::kind`]. Registering a second handler for the same key
/// replaces the first.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<EntryType, Arc<dyn EntryHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in handlers.
    ///
    /// - `item`: [`ItemHandler`]
    /// - `item-tag`: [`ItemTagHandler`]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ItemHandler));
        registry.register(Arc::new(ItemTagHandler));
        registry
    }

    /// Registers `handler` under its own type key, returning the one it replaced.
    pub fn register(&mut self, handler: Arc<dyn EntryHandler>) -> Option<Arc<dyn EntryHandler>> {
        let kind = EntryType::new(handler.kind());
        self.handlers.insert(kind, handler)
    }

    /// Finds the handler governing `kind`.
    pub fn get(&self, kind: &EntryType) -> Option<&Arc<dyn EntryHandler>> {
        self.handlers.get(kind)
    }

    /// Returns the handler governing `entry`'s type.
    pub fn handler_for(&self, entry: &PoolEntry) -> Option<&Arc<dyn EntryHandler>> {
        self.get(entry.kind())
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns an iterator over registered type keys (for debugging).
    pub fn kinds(&self) -> impl Iterator<Item = &EntryType> + '_ {
        self.handlers.keys()
    }

    /// Checks whether `entry` is usable.
    ///
    /// Never fails: an unknown type, a handler error and a handler panic are
    /// all logged and reported as `false`.
    ///
    /// A caught panic still goes through the process panic hook before the
    /// `warn!` event is emitted. The hook belongs to the host; one that wants
    /// panics reported only through `tracing` installs its own with
    /// [`std::panic::set_hook`].
    pub fn is_valid(&self, entry: &PoolEntry, ctx: &ValidityContext<'_>) -> bool {
        let Some(handler) = self.handler_for(entry) else {
            warn!(
                target: "reward_core::kinds",
                entry = entry.id(),
                kind = %entry.kind(),
                content = entry.content(),
                details = %entry.details(),
                "Pool entry has invalid type"
            );
            return false;
        };

        match catch_unwind(AssertUnwindSafe(|| handler.is_valid(entry, ctx))) {
            Ok(Ok(true)) => true,
            Ok(Ok(false)) => {
                debug!(
                    target: "reward_core::kinds",
                    entry = entry.id(),
                    kind = %entry.kind(),
                    content = entry.content(),
                    "Pool entry rejected by handler"
                );
                false
            }
            Ok(Err(error)) => {
                warn!(
                    target: "reward_core::kinds",
                    entry = entry.id(),
                    kind = %entry.kind(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    details = %entry.details(),
                    "Pool entry invalid"
                );
                false
            }
            Err(_) => {
                warn!(
                    target: "reward_core::kinds",
                    entry = entry.id(),
                    kind = %entry.kind(),
                    details = %entry.details(),
                    "Pool entry handler panicked"
                );
                false
            }
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::EntryError;

    struct Fixed(&'static str, bool);

    impl EntryHandler for Fixed {
        fn kind(&self) -> &str {
            self.0
        }

        fn is_valid(&self, _: &PoolEntry, _: &ValidityContext<'_>) -> Result<bool, EntryError> {
            Ok(self.1)
        }
    }

    #[test]
    fn builtin_registers_item_kinds() {
        let registry = HandlerRegistry::builtin();
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&EntryType::item()).is_some());
        assert!(registry.get(&EntryType::item_tag()).is_some());
        assert!(registry.get(&EntryType::new("entity")).is_none());
    }

    #[test]
    fn register_replaces_same_kind() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register(Arc::new(Fixed("entity", true))).is_none());
        let replaced = registry.register(Arc::new(Fixed("entity", false)));
        assert_eq!(replaced.map(|h| h.kind().to_owned()), Some("entity".to_owned()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn handler_identity_is_its_kind() {
        let registry = HandlerRegistry::builtin();
        let entry = PoolEntry::create();
        let handler = registry.handler_for(&entry).map(|h| h.kind());
        assert_eq!(handler, Some(EntryType::ITEM));
    }
}
