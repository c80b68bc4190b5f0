//! Minimal [`reward_core::ItemOracle`] backed by an in-memory set.
use std::collections::BTreeSet;

use reward_core::ItemOracle;

/// Registry of known item identities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemTable {
    items: BTreeSet<String>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `item`. Returns false if it was already known.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ItemTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ItemOracle for ItemTable {
    fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}
