//! Domain model for trash retention.

mod error;
mod trash_item;

pub use error::TrashDomainError;
pub use trash_item::{PersistedTrashItemData, TrashItem, TrashItemId};
