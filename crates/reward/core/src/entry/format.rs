//! Serialized form of pool entries.
//!
//! Data packs write unset amounts as `[-1, -1]` and an unset unit worth as
//! `-1000.0`. Those sentinels are translated to `None` here and nowhere else.
//! The catalog-assigned id is not part of the serialized form.

use serde::{Deserialize, Serialize};

use super::{EntryRange, EntryType, ForbiddenContent, PoolEntry, RangeError, Rarity};
use crate::error::{ErrorSeverity, RewardError};

const UNSET_AMOUNT: i32 = -1;
const UNSET_UNIT_WORTH: f64 = -1000.0;

/// Errors raised when a serialized entry violates the data model.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EntryFormatError {
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] RangeError),

    #[error("unit worth must be finite, got {0}")]
    NonFiniteWorth(f64),

    /// `[-1, -1]` is how an unset amount is written; it cannot be a real amount.
    #[error("amount [-1 - -1] is reserved for an unset amount")]
    ReservedAmount,

    /// `-1000.0` is how an unset unit worth is written; it cannot be a real worth.
    #[error("unit worth {0} is reserved for an unset unit worth")]
    ReservedUnitWorth(f64),
}

impl RewardError for EntryFormatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            EntryFormatError::InvalidAmount(_) => "ENTRY_INVALID_AMOUNT",
            EntryFormatError::NonFiniteWorth(_) => "ENTRY_NON_FINITE_WORTH",
            EntryFormatError::ReservedAmount => "ENTRY_RESERVED_AMOUNT",
            EntryFormatError::ReservedUnitWorth(_) => "ENTRY_RESERVED_UNIT_WORTH",
        }
    }
}

/// Errors raised by [`PoolEntry::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode pool entry: {0}")]
    Json(#[from] serde_json::Error),
}

impl RewardError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        "ENTRY_DECODE_FAILED"
    }
}

/// Rejects set values equal to the unset sentinels; they would decode as unset.
pub(super) fn check_reserved(
    amount: Option<EntryRange>,
    unit_worth: Option<f64>,
) -> Result<(), EntryFormatError> {
    if let Some(range) = amount
        && range.min() == UNSET_AMOUNT
        && range.max() == UNSET_AMOUNT
    {
        return Err(EntryFormatError::ReservedAmount);
    }
    if let Some(worth) = unit_worth
        && worth == UNSET_UNIT_WORTH
    {
        return Err(EntryFormatError::ReservedUnitWorth(worth));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RangeRepr {
    min: i32,
    max: i32,
}

impl RangeRepr {
    fn unset() -> Self {
        Self {
            min: UNSET_AMOUNT,
            max: UNSET_AMOUNT,
        }
    }

    fn is_unset(&self) -> bool {
        self.min == UNSET_AMOUNT && self.max == UNSET_AMOUNT
    }
}

fn default_kind() -> EntryType {
    EntryType::new(EntryType::NULL)
}

fn default_content() -> String {
    PoolEntry::DEFAULT_CONTENT.to_owned()
}

fn unset_unit_worth() -> f64 {
    UNSET_UNIT_WORTH
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntryRepr {
    #[serde(rename = "type", default = "default_kind")]
    kind: EntryType,
    #[serde(default)]
    rarity: Rarity,
    #[serde(default = "default_content")]
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default = "RangeRepr::unset")]
    amount: RangeRepr,
    #[serde(default = "unset_unit_worth")]
    unit_worth: f64,
    #[serde(default = "one")]
    weight_mult: f64,
    #[serde(default = "one")]
    time_mult: f64,
    #[serde(default)]
    rep_required: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    forbids: Vec<ForbiddenContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conditions: Option<serde_json::Value>,
    #[serde(default)]
    mystery: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nbt: Option<String>,
}

impl TryFrom<PoolEntryRepr> for PoolEntry {
    type Error = EntryFormatError;

    fn try_from(repr: PoolEntryRepr) -> Result<Self, Self::Error> {
        let amount = if repr.amount.is_unset() {
            None
        } else {
            Some(EntryRange::new(repr.amount.min, repr.amount.max)?)
        };

        if !repr.unit_worth.is_finite() {
            return Err(EntryFormatError::NonFiniteWorth(repr.unit_worth));
        }
        let unit_worth = (repr.unit_worth != UNSET_UNIT_WORTH).then_some(repr.unit_worth);

        Ok(PoolEntry {
            id: String::new(),
            kind: repr.kind,
            rarity: repr.rarity,
            content: repr.content,
            name: repr.name,
            icon: repr.icon,
            amount,
            unit_worth,
            weight_mult: repr.weight_mult,
            time_mult: repr.time_mult,
            rep_required: repr.rep_required,
            forbids: repr.forbids,
            conditions: repr.conditions,
            mystery: repr.mystery,
            nbt: repr.nbt,
        })
    }
}

impl From<PoolEntry> for PoolEntryRepr {
    fn from(entry: PoolEntry) -> Self {
        let amount = entry.amount.map_or_else(RangeRepr::unset, |range| RangeRepr {
            min: range.min(),
            max: range.max(),
        });

        Self {
            kind: entry.kind,
            rarity: entry.rarity,
            content: entry.content,
            name: entry.name,
            icon: entry.icon,
            amount,
            unit_worth: entry.unit_worth.unwrap_or(UNSET_UNIT_WORTH),
            weight_mult: entry.weight_mult,
            time_mult: entry.time_mult,
            rep_required: entry.rep_required,
            forbids: entry.forbids,
            conditions: entry.conditions,
            mystery: entry.mystery,
            nbt: entry.nbt,
        }
    }
}

impl PoolEntry {
    /// Serializes this entry to its JSON data-pack form.
    pub fn save(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a single entry from its JSON data-pack form.
    ///
    /// The returned entry has an empty id; the owning catalog assigns one
    /// with [`PoolEntry::with_id`].
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON dump used in diagnostics.
    pub(crate) fn details(&self) -> String {
        self.save()
            .unwrap_or_else(|e| format!("<unserializable entry: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_decode_to_none() {
        let entry = PoolEntry::from_json(
            r#"{"type":"item","content":"minecraft:stone","amount":{"min":-1,"max":-1},"unitWorth":-1000.0}"#,
        )
        .unwrap();
        assert_eq!(entry.amount(), None);
        assert_eq!(entry.unit_worth(), None);
    }

    #[test]
    fn missing_fields_take_data_pack_defaults() {
        let entry = PoolEntry::from_json(r#"{"type":"item"}"#).unwrap();
        assert_eq!(entry.content(), "NO_CONTENT");
        assert_eq!(entry.amount(), None);
        assert_eq!(entry.unit_worth(), None);
        assert_eq!(entry.weight_mult(), 1.0);
        assert_eq!(entry.time_mult(), 1.0);
        assert_eq!(entry.rep_required(), 0.0);
        assert_eq!(entry.id(), "");
    }

    #[test]
    fn missing_type_is_the_null_pool() {
        let entry = PoolEntry::from_json(r#"{"content":"minecraft:stone"}"#).unwrap();
        assert_eq!(entry.kind().as_str(), EntryType::NULL);
    }

    #[test]
    fn inverted_amount_is_rejected() {
        let err = PoolEntry::from_json(
            r#"{"type":"item","content":"minecraft:stone","amount":{"min":5,"max":2}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("greater than maximum"));
    }

    #[test]
    fn unset_fields_encode_as_sentinels() {
        let entry = PoolEntry::builder(EntryType::ITEM, "minecraft:stone")
            .no_amount()
            .no_unit_worth()
            .build()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&entry.save().unwrap()).unwrap();
        assert_eq!(value["amount"]["min"], -1);
        assert_eq!(value["amount"]["max"], -1);
        assert_eq!(value["unitWorth"], -1000.0);
        assert_eq!(value["type"], "item");
    }
}
