//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The item
//! list is a disposable projection of the remote collection: every
//! snapshot replaces it wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::GroceryItem;

/// UI state: the local projection of the collection plus edit-mode state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest snapshot of the grocery collection, in server order
    pub items: Vec<GroceryItem>,
    /// Item currently in edit mode (at most one at a time)
    pub editing_id: Option<String>,
    /// Edit buffer, seeded with the item's name when editing starts
    pub edit_text: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the local item list wholesale with a fresh snapshot
pub fn store_replace_items(store: &AppStore, snapshot: Vec<GroceryItem>) {
    *store.items().write() = snapshot;
}

/// Enter edit mode for one item, seeding the buffer with its current name
pub fn store_begin_edit(store: &AppStore, item: &GroceryItem) {
    *store.editing_id().write() = Some(item.id.clone());
    *store.edit_text().write() = item.name.clone();
}

/// Leave edit mode
pub fn store_end_edit(store: &AppStore) {
    *store.editing_id().write() = None;
}
