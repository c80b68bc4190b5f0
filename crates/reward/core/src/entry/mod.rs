//! Pool entries: immutable templates describing a possible reward.
//!
//! A [`PoolEntry`] is built once (by a data-pack loader or
//! [`PoolEntry::builder`]) and never mutated afterwards. Unset amount and unit
//! worth are `None` here; the `-1`/`-1000.0` sentinels only exist in the
//! serialized form (see [`format`]).
mod format;
mod range;

use std::fmt;

pub use format::{DecodeError, EntryFormatError};
pub use range::{EntryRange, RangeError};

/// Open key naming the handler that governs an entry.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntryType(String);

impl EntryType {
    pub const ITEM: &'static str = "item";
    pub const ITEM_TAG: &'static str = "item-tag";
    /// Placeholder type of an entry that never declared one; no handler claims it.
    pub const NULL: &'static str = "null_pool";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn item() -> Self {
        Self::new(Self::ITEM)
    }

    pub fn item_tag() -> Self {
        Self::new(Self::ITEM_TAG)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_item(&self) -> bool {
        self.0 == Self::ITEM
    }

    pub fn is_item_tag(&self) -> bool {
        self.0 == Self::ITEM_TAG
    }
}

impl From<&str> for EntryType {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reward tier. Carried through to resolved rewards untouched.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A `(type, content)` pair an entry refuses to share a set with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ForbiddenContent {
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub content: String,
}

impl ForbiddenContent {
    pub fn new(kind: impl Into<EntryType>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }

    /// True if `entry` declares exactly this type and content.
    pub fn matches(&self, entry: &PoolEntry) -> bool {
        self.kind == entry.kind && self.content == entry.content
    }
}

/// Template of a possible reward.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "format::PoolEntryRepr", into = "format::PoolEntryRepr")]
pub struct PoolEntry {
    id: String,
    kind: EntryType,
    rarity: Rarity,
    content: String,
    name: Option<String>,
    icon: Option<String>,
    amount: Option<EntryRange>,
    unit_worth: Option<f64>,
    weight_mult: f64,
    time_mult: f64,
    rep_required: f64,
    forbids: Vec<ForbiddenContent>,
    conditions: Option<serde_json::Value>,
    mystery: bool,
    nbt: Option<String>,
}

impl PoolEntry {
    pub const DEFAULT_CONTENT: &'static str = "NO_CONTENT";
    pub const DEFAULT_AMOUNT: EntryRange = EntryRange::ONE;
    pub const DEFAULT_UNIT_WORTH: f64 = 100.0;

    /// Default factory: one unit of `NO_CONTENT` worth 100.
    pub fn create() -> Self {
        Self {
            id: String::new(),
            kind: EntryType::item(),
            rarity: Rarity::default(),
            content: Self::DEFAULT_CONTENT.to_owned(),
            name: None,
            icon: None,
            amount: Some(Self::DEFAULT_AMOUNT),
            unit_worth: Some(Self::DEFAULT_UNIT_WORTH),
            weight_mult: 1.0,
            time_mult: 1.0,
            rep_required: 0.0,
            forbids: Vec::new(),
            conditions: None,
            mystery: false,
            nbt: None,
        }
    }

    pub fn builder(kind: impl Into<EntryType>, content: impl Into<String>) -> PoolEntryBuilder {
        PoolEntryBuilder::new(kind.into(), content.into())
    }

    /// Returns a copy of this entry carrying the catalog-assigned `id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &EntryType {
        &self.kind
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Declared amount range, `None` when the data pack left it unset.
    pub fn amount(&self) -> Option<EntryRange> {
        self.amount
    }

    /// Declared worth of a single unit, `None` when unset.
    pub fn unit_worth(&self) -> Option<f64> {
        self.unit_worth
    }

    /// Amount range used for resolution; unset falls back to [`Self::DEFAULT_AMOUNT`].
    pub fn amount_or_default(&self) -> EntryRange {
        self.amount.unwrap_or(Self::DEFAULT_AMOUNT)
    }

    /// Unit worth used for resolution; unset falls back to [`Self::DEFAULT_UNIT_WORTH`].
    pub fn unit_worth_or_default(&self) -> f64 {
        self.unit_worth.unwrap_or(Self::DEFAULT_UNIT_WORTH)
    }

    pub fn weight_mult(&self) -> f64 {
        self.weight_mult
    }

    pub fn time_mult(&self) -> f64 {
        self.time_mult
    }

    pub fn rep_required(&self) -> f64 {
        self.rep_required
    }

    pub fn forbids(&self) -> &[ForbiddenContent] {
        &self.forbids
    }

    pub fn conditions(&self) -> Option<&serde_json::Value> {
        self.conditions.as_ref()
    }

    pub fn is_mystery(&self) -> bool {
        self.mystery
    }

    pub fn nbt(&self) -> Option<&str> {
        self.nbt.as_deref()
    }

    /// Worth of every possible amount, ascending.
    pub fn worth_steps(&self) -> Vec<f64> {
        crate::worth::worth_steps(self.amount_or_default(), self.unit_worth_or_default())
    }

    /// Absolute distance of `value` from this entry's worth range (0 inside it).
    pub fn worth_distance_from(&self, value: f64) -> i32 {
        crate::worth::worth_distance(self.amount_or_default(), self.unit_worth_or_default(), value)
    }
}

impl Default for PoolEntry {
    fn default() -> Self {
        Self::create()
    }
}

/// Builder for constructing pool entries.
pub struct PoolEntryBuilder {
    entry: PoolEntry,
}

impl PoolEntryBuilder {
    fn new(kind: EntryType, content: String) -> Self {
        let mut entry = PoolEntry::create();
        entry.kind = kind;
        entry.content = content;
        Self { entry }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entry.id = id.into();
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.entry.rarity = rarity;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = Some(name.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = Some(icon.into());
        self
    }

    pub fn amount(mut self, amount: EntryRange) -> Self {
        self.entry.amount = Some(amount);
        self
    }

    /// Leave the amount unset.
    pub fn no_amount(mut self) -> Self {
        self.entry.amount = None;
        self
    }

    pub fn unit_worth(mut self, unit_worth: f64) -> Self {
        self.entry.unit_worth = Some(unit_worth);
        self
    }

    /// Leave the unit worth unset.
    pub fn no_unit_worth(mut self) -> Self {
        self.entry.unit_worth = None;
        self
    }

    pub fn weight_mult(mut self, weight_mult: f64) -> Self {
        self.entry.weight_mult = weight_mult;
        self
    }

    pub fn time_mult(mut self, time_mult: f64) -> Self {
        self.entry.time_mult = time_mult;
        self
    }

    pub fn rep_required(mut self, rep_required: f64) -> Self {
        self.entry.rep_required = rep_required;
        self
    }

    pub fn forbid(mut self, kind: impl Into<EntryType>, content: impl Into<String>) -> Self {
        self.entry.forbids.push(ForbiddenContent::new(kind, content));
        self
    }

    pub fn conditions(mut self, conditions: serde_json::Value) -> Self {
        self.entry.conditions = Some(conditions);
        self
    }

    pub fn mystery(mut self, mystery: bool) -> Self {
        self.entry.mystery = mystery;
        self
    }

    pub fn nbt(mut self, nbt: impl Into<String>) -> Self {
        self.entry.nbt = Some(nbt.into());
        self
    }

    /// Builds the entry.
    ///
    /// # Errors
    ///
    /// Returns `EntryFormatError::NonFiniteWorth` if the unit worth is NaN or
    /// infinite, and `ReservedAmount`/`ReservedUnitWorth` if the amount is
    /// `[-1, -1]` or the unit worth is `-1000.0` (the serialized "unset" markers;
    /// use [`Self::no_amount`] and [`Self::no_unit_worth`] instead).
    pub fn build(self) -> Result<PoolEntry, EntryFormatError> {
        if let Some(worth) = self.entry.unit_worth
            && !worth.is_finite()
        {
            return Err(EntryFormatError::NonFiniteWorth(worth));
        }
        format::check_reserved(self.entry.amount, self.entry.unit_worth)?;
        Ok(self.entry)
    }
}
