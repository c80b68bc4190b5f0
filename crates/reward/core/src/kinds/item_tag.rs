use super::{EntryError, EntryHandler, ValidityContext};
use crate::entry::{EntryType, PoolEntry};

/// Handler for `item-tag` entries: valid when the named tag has members.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemTagHandler;

impl EntryHandler for ItemTagHandler {
    fn kind(&self) -> &str {
        EntryType::ITEM_TAG
    }

    fn is_valid(&self, entry: &PoolEntry, ctx: &ValidityContext<'_>) -> Result<bool, EntryError> {
        let tag = entry.content();
        if tag.trim().is_empty() {
            return Err(EntryError::BlankContent);
        }
        if ctx.env.tags().members_of(tag, ctx.world).is_empty() {
            return Err(EntryError::EmptyTag(tag.to_owned()));
        }
        Ok(true)
    }
}
