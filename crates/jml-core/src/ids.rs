//! Item identity helpers.
//!
//! Process records and tasks are list items keyed by a positive integer,
//! assigned by the store on insert.

use crate::errors::CoreError;

/// Identity of a process record or task within its list.
pub type ItemId = i64;

/// Reject ids that can never reference a stored item.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `id` is zero or negative.
pub fn validate_item_id(id: ItemId) -> Result<ItemId, CoreError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(CoreError::Validation(format!(
            "item id must be a positive integer, got {id}"
        )))
    }
}
