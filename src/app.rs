//! Grocery List App
//!
//! Top-level component: opens the live subscription, keeps the local
//! snapshot, and drives the expiry policy (sweep after every snapshot
//! plus one re-armed timer for the earliest pending deadline).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::backend::BackendHandle;
use crate::components::{GroceryListView, NewItemForm};
use crate::expiry::{self, ExpirySweep};
use crate::models::GroceryItem;
use crate::store::{store_replace_items, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(backend: BackendHandle) -> impl IntoView {
    let app_store = Store::new(AppState::default());
    provide_context(app_store);
    provide_context(SendWrapper::new(backend.clone()));

    let sweep = Rc::new(RefCell::new(ExpirySweep::new()));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    // Live query over the collection; every push replaces the list wholesale
    let on_snapshot = {
        let backend = backend.clone();
        let sweep = sweep.clone();
        let timer = timer.clone();
        move |snapshot: Vec<GroceryItem>| {
            web_sys::console::log_1(
                &format!("[SYNC] snapshot: {} items", snapshot.len()).into(),
            );
            store_replace_items(&app_store, snapshot);

            let items = app_store.items().get_untracked();
            run_sweep(&backend, &sweep, &items);
            arm_expiry_timer(app_store, &backend, &sweep, &timer);
        }
    };
    let subscription = backend.subscribe(Box::new(on_snapshot));

    // The subscription and timer handles are `!Send`; `on_cleanup` requires a
    // `Send + Sync` closure, so carry them through a `SendWrapper` (the cleanup
    // runs on the same single WASM thread).
    let cleanup_guard = SendWrapper::new((subscription, timer));
    on_cleanup(move || {
        let (subscription, timer) = cleanup_guard.take();
        drop(subscription);
        timer.borrow_mut().take();
    });

    view! {
        <div class="container">
            <h1>"Grocery List"</h1>

            <NewItemForm />

            <GroceryListView />

            <p class="item-count">{move || format!("{} items", app_store.items().read().len())}</p>
        </div>
    }
}

/// Issue deletes for items already past the retention window
fn run_sweep(backend: &BackendHandle, sweep: &Rc<RefCell<ExpirySweep>>, items: &[GroceryItem]) {
    let due = sweep.borrow_mut().collect_expired(items, Utc::now());
    if due.is_empty() {
        return;
    }

    web_sys::console::log_1(&format!("[SWEEP] {} items past retention", due.len()).into());
    let backend = backend.clone();
    spawn_local(async move {
        actions::delete_expired(backend.as_ref(), due).await;
    });
}

/// Re-arm the single wake-up for the earliest upcoming expiry.
///
/// The timer re-runs the sweep over whatever snapshot is current when it
/// fires, so an untoggle in the meantime is honored without any
/// cancellation handshake. No checked items, no timer.
fn arm_expiry_timer(
    app_store: AppStore,
    backend: &BackendHandle,
    sweep: &Rc<RefCell<ExpirySweep>>,
    timer: &Rc<RefCell<Option<Timeout>>>,
) {
    let now = Utc::now();
    let items = app_store.items().get_untracked();
    let Some(deadline) = expiry::next_deadline(&items, now) else {
        timer.borrow_mut().take();
        return;
    };

    // Fire just past the boundary; expiry is strict
    let delay_ms = (deadline - now).num_milliseconds().max(0) as u32 + 1;

    let fire_backend = backend.clone();
    let fire_sweep = sweep.clone();
    let fire_timer = timer.clone();
    let handle = Timeout::new(delay_ms, move || {
        let items = app_store.items().get_untracked();
        run_sweep(&fire_backend, &fire_sweep, &items);
        arm_expiry_timer(app_store, &fire_backend, &fire_sweep, &fire_timer);
    });
    *timer.borrow_mut() = Some(handle);
}
