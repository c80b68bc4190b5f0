use super::{EntryError, EntryHandler, ValidityContext};
use crate::content::ContentRef;
use crate::entry::{EntryType, PoolEntry};

/// Handler for `item` entries.
///
/// A tagged item is valid when its tag has members; a literal identity is
/// valid when the item registry knows it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemHandler;

impl EntryHandler for ItemHandler {
    fn kind(&self) -> &str {
        EntryType::ITEM
    }

    fn is_valid(&self, entry: &PoolEntry, ctx: &ValidityContext<'_>) -> Result<bool, EntryError> {
        if entry.content().trim().is_empty() {
            return Err(EntryError::BlankContent);
        }

        match ContentRef::of(entry, ctx.config) {
            ContentRef::TaggedItem(tag) => {
                if ctx.env.tags().members_of(tag, ctx.world).is_empty() {
                    return Err(EntryError::EmptyTag(tag.to_owned()));
                }
                Ok(true)
            }
            _ => {
                let items = ctx.env.items()?;
                if !items.contains(entry.content()) {
                    return Err(EntryError::UnknownItem(entry.content().to_owned()));
                }
                Ok(true)
            }
        }
    }
}
