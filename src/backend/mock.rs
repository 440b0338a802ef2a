//! In-Memory Mock Store
//!
//! Test double for the `GroceryStore` seam: records every call with its
//! serialized payload and replays pushed snapshots through the held
//! subscription callback.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::{GroceryStore, ItemPatch, NewItemFields, SnapshotFn, Subscription};
use crate::models::GroceryItem;

/// One recorded backend call, payload captured as plain JSON
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(serde_json::Value),
    Update { id: String, fields: serde_json::Value },
    Delete { id: String },
}

#[derive(Default)]
pub struct MockStore {
    calls: RefCell<Vec<StoreCall>>,
    next_id: RefCell<u32>,
    snapshot_fn: Rc<RefCell<Option<SnapshotFn>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Ids passed to `delete`, in call order
    pub fn deleted_ids(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Delete { id } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Push a server snapshot through the live subscription, if one is open
    pub fn push_snapshot(&self, items: Vec<GroceryItem>) {
        if let Some(on_snapshot) = self.snapshot_fn.borrow().as_ref() {
            on_snapshot(items);
        }
    }
}

#[async_trait(?Send)]
impl GroceryStore for MockStore {
    async fn create(&self, fields: NewItemFields<'_>) -> Result<String, String> {
        let value = serde_json::to_value(&fields).map_err(|e| e.to_string())?;
        self.calls.borrow_mut().push(StoreCall::Create(value));

        let mut next = self.next_id.borrow_mut();
        *next += 1;
        Ok(format!("doc-{}", next))
    }

    async fn update(&self, id: &str, patch: ItemPatch<'_>) -> Result<(), String> {
        let value = serde_json::to_value(&patch).map_err(|e| e.to_string())?;
        self.calls.borrow_mut().push(StoreCall::Update {
            id: id.to_string(),
            fields: value,
        });
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        self.calls
            .borrow_mut()
            .push(StoreCall::Delete { id: id.to_string() });
        Ok(())
    }

    fn subscribe(&self, on_snapshot: SnapshotFn) -> Subscription {
        *self.snapshot_fn.borrow_mut() = Some(on_snapshot);

        let slot = self.snapshot_fn.clone();
        Subscription::new(move || {
            *slot.borrow_mut() = None;
        })
    }
}
