/// Item registry used by the built-in item handler to check literal identities.
pub trait ItemOracle: Send + Sync {
    /// Returns true if `item` names a registered item.
    fn contains(&self, item: &str) -> bool;
}
