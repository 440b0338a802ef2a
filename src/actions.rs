//! User Actions
//!
//! Mutation handlers shared by the UI components. Every handler is
//! fire-and-forget: the write is issued, nothing is retried, and the
//! next snapshot from the live query is the source of truth.

use chrono::{DateTime, Utc};

use crate::backend::{GroceryStore, ItemPatch, NewItemFields};

/// Create a new item with quantity 1.
///
/// Empty input is a no-op; returns whether a create request was issued.
pub async fn add_item(
    store: &dyn GroceryStore,
    name: &str,
    now: DateTime<Utc>,
) -> Result<bool, String> {
    if name.is_empty() {
        return Ok(false);
    }

    store
        .create(NewItemFields {
            name,
            quantity: 1,
            purchased: false,
            created_at: now,
        })
        .await?;
    Ok(true)
}

/// Rename an item from the edit buffer.
///
/// A draft that trims to empty is a no-op and keeps edit mode open;
/// returns whether the rename was issued. The name is sent as typed.
pub async fn save_edit(store: &dyn GroceryStore, id: &str, draft: &str) -> Result<bool, String> {
    if draft.trim().is_empty() {
        return Ok(false);
    }

    store
        .update(
            id,
            ItemPatch {
                name: Some(draft),
                ..Default::default()
            },
        )
        .await?;
    Ok(true)
}

/// Flip the purchased flag.
///
/// Checking stamps `checkedAt`; unchecking clears it to null so the
/// expiry policy stops tracking the item. `purchased` is the item's
/// current state, as rendered.
pub async fn toggle_purchased(
    store: &dyn GroceryStore,
    id: &str,
    purchased: bool,
    now: DateTime<Utc>,
) -> Result<(), String> {
    let patch = if purchased {
        ItemPatch {
            purchased: Some(false),
            checked_at: Some(None),
            ..Default::default()
        }
    } else {
        ItemPatch {
            purchased: Some(true),
            checked_at: Some(Some(now)),
            ..Default::default()
        }
    };
    store.update(id, patch).await
}

/// Delete unconditionally; no confirmation, no "already deleted" handling
pub async fn remove_item(store: &dyn GroceryStore, id: &str) -> Result<(), String> {
    store.delete(id).await
}

/// Issue one delete per expired id collected by the sweep.
///
/// Individual failures are ignored; the item shows up expired again in
/// the next snapshot and gets a fresh episode once it leaves and returns.
pub async fn delete_expired(store: &dyn GroceryStore, due: Vec<String>) -> usize {
    let mut issued = 0;
    for id in due {
        if store.delete(&id).await.is_ok() {
            issued += 1;
        }
    }
    issued
}
