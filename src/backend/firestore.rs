//! Firestore Bridge
//!
//! Bindings to the Firestore SDK exposed by the host page at
//! `window.__FIRESTORE__`. The bridge mirrors the firebase/firestore
//! module surface: `initializeApp`, `addDoc`, `updateDoc`, `deleteDoc`,
//! and `onSnapshot`, where the snapshot callback receives the full
//! ordered array of `{id, ...fields}` documents and `onSnapshot` returns
//! an unsubscribe function.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use async_trait::async_trait;

use super::{
    GroceryStore, ItemPatch, NewItemFields, SnapshotFn, Subscription, GROCERY_COLLECTION,
};
use crate::config::FirestoreConfig;
use crate::models::GroceryItem;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__FIRESTORE__"], js_name = initializeApp)]
    fn initialize_app(config: JsValue);

    #[wasm_bindgen(catch, js_namespace = ["window", "__FIRESTORE__"], js_name = addDoc)]
    async fn add_doc(collection: &str, fields: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__FIRESTORE__"], js_name = updateDoc)]
    async fn update_doc(collection: &str, id: &str, fields: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__FIRESTORE__"], js_name = deleteDoc)]
    async fn delete_doc(collection: &str, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__FIRESTORE__"], js_name = onSnapshot)]
    fn on_snapshot(collection: &str, callback: &js_sys::Function) -> js_sys::Function;
}

/// Handle to the initialized Firestore instance.
///
/// Initialized once at startup and alive for the process's lifetime;
/// there is no teardown, retry, or pooling. Failures surface through the
/// individual operations.
pub struct FirestoreStore;

impl FirestoreStore {
    /// Initialize the bridge with the web-app credentials
    pub fn connect(config: &FirestoreConfig) -> Result<Self, String> {
        let js_config = serde_wasm_bindgen::to_value(config).map_err(|e| e.to_string())?;
        initialize_app(js_config);
        Ok(Self)
    }
}

#[async_trait(?Send)]
impl GroceryStore for FirestoreStore {
    async fn create(&self, fields: NewItemFields<'_>) -> Result<String, String> {
        let js_fields = serde_wasm_bindgen::to_value(&fields).map_err(|e| e.to_string())?;
        let id = add_doc(GROCERY_COLLECTION, js_fields)
            .await
            .map_err(|e| format!("addDoc error: {:?}", e))?;
        serde_wasm_bindgen::from_value(id).map_err(|e| e.to_string())
    }

    async fn update(&self, id: &str, patch: ItemPatch<'_>) -> Result<(), String> {
        let js_fields = serde_wasm_bindgen::to_value(&patch).map_err(|e| e.to_string())?;
        update_doc(GROCERY_COLLECTION, id, js_fields)
            .await
            .map_err(|e| format!("updateDoc error: {:?}", e))
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        delete_doc(GROCERY_COLLECTION, id)
            .await
            .map_err(|e| format!("deleteDoc error: {:?}", e))
    }

    fn subscribe(&self, on_snap: SnapshotFn) -> Subscription {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<GroceryItem>>(docs) {
                Ok(items) => on_snap(items),
                // Keep the previous local projection; the next good push corrects it
                Err(e) => web_sys::console::warn_1(
                    &format!("[SYNC] snapshot decode failed: {}", e).into(),
                ),
            }
        });
        let unsubscribe = on_snapshot(GROCERY_COLLECTION, callback.as_ref().unchecked_ref());

        Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            // The closure must outlive the remote subscription
            drop(callback);
        })
    }
}
