//! Grocery List Frontend Entry Point

mod actions;
mod app;
mod backend;
mod components;
mod config;
mod expiry;
mod models;
mod store;

use std::rc::Rc;

use leptos::prelude::*;

use app::App;
use backend::{BackendHandle, FirestoreStore};
use config::FirestoreConfig;

/// Web-app credentials for the backing Firestore project
fn firestore_config() -> FirestoreConfig {
    FirestoreConfig {
        api_key: "AIzaSyA0sample0key0for0grocery0demo000000".to_string(),
        auth_domain: "grocery-demo.firebaseapp.com".to_string(),
        project_id: "grocery-demo".to_string(),
        storage_bucket: "grocery-demo.firebasestorage.app".to_string(),
        messaging_sender_id: "000000000000".to_string(),
        app_id: "1:000000000000:web:0000000000000000000000".to_string(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let backend: BackendHandle = match FirestoreStore::connect(&firestore_config()) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            web_sys::console::error_1(&format!("[INIT] backend init failed: {}", e).into());
            return;
        }
    };

    mount_to_body(move || view! { <App backend=backend.clone() /> });
}
