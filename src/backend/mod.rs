//! Document Store Bindings
//!
//! Abstract interface to the remote document database. The UI only ever
//! talks to the `GroceryStore` trait; the production implementation is
//! the Firestore bridge, and tests swap in an in-memory mock.

mod firestore;
#[cfg(test)]
pub mod mock;

pub use firestore::FirestoreStore;

use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leptos::prelude::expect_context;
use send_wrapper::SendWrapper;
use serde::Serialize;

use crate::models::GroceryItem;

/// Collection holding the grocery item documents
pub const GROCERY_COLLECTION: &str = "groceryItems";

// ========================
// Wire Shapes
// ========================

/// Field set sent when creating a new item
#[derive(Debug, Serialize)]
pub struct NewItemFields<'a> {
    pub name: &'a str,
    pub quantity: u32,
    pub purchased: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left untouched on the document.
///
/// `checked_at` uses a double `Option`: the outer `None` skips the field
/// entirely, `Some(None)` writes an explicit `checkedAt: null`.
#[derive(Debug, Default, Serialize)]
pub struct ItemPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased: Option<bool>,
    #[serde(rename = "checkedAt", skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<Option<DateTime<Utc>>>,
}

// ========================
// Store Seam
// ========================

/// Callback invoked with the full ordered snapshot on every change
pub type SnapshotFn = Box<dyn Fn(Vec<GroceryItem>)>;

/// Live-query handle; dropping it cancels the subscription
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// CRUD plus live query over the grocery collection
///
/// All operations are async and fire-and-forget from the UI's point of
/// view; errors are plain strings and the next snapshot is authoritative.
#[async_trait(?Send)]
pub trait GroceryStore {
    /// Create a new document; the backend assigns and returns its id
    async fn create(&self, fields: NewItemFields<'_>) -> Result<String, String>;

    /// Apply a partial update to an existing document.
    /// No existence check; an unknown id is the backend's problem.
    async fn update(&self, id: &str, patch: ItemPatch<'_>) -> Result<(), String>;

    /// Remove a document. Success is not verified.
    async fn delete(&self, id: &str) -> Result<(), String>;

    /// Open a live query over the collection. Every change pushes a full
    /// ordered snapshot to `on_snapshot` until the handle is dropped.
    fn subscribe(&self, on_snapshot: SnapshotFn) -> Subscription;
}

/// Shared handle to the one store initialized at startup
pub type BackendHandle = Rc<dyn GroceryStore>;

/// Get the backend handle from context.
///
/// The handle is a `!Send` `Rc`, so it is held in Leptos context behind a
/// `SendWrapper` (single-threaded WASM never touches it off-thread).
pub fn use_backend() -> BackendHandle {
    expect_context::<SendWrapper<BackendHandle>>().take()
}
