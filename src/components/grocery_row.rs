//! Grocery Row Component
//!
//! A single item: checkbox, name (or in-place edit field), created-at
//! line, and the edit/delete actions.

use chrono::Utc;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos::task::spawn_local;

use crate::actions;
use crate::backend::use_backend;
use crate::models::GroceryItem;
use crate::store::{store_begin_edit, store_end_edit, use_app_store, AppStateStoreFields};

/// A single grocery item row
#[component]
pub fn GroceryRow(item: GroceryItem) -> impl IntoView {
    // Carry the `!Send` handle wrapped so the reactive edit/save render
    // closure (which captures it) satisfies Leptos's `Send` bound.
    let backend = SendWrapper::new(use_backend());
    let store = use_app_store();

    let id = item.id.clone();
    let name = item.name.clone();
    let purchased = item.purchased;
    let created = item.created_at.format("%Y-%m-%d %H:%M").to_string();

    let is_editing = {
        let id = id.clone();
        move || store.editing_id().get().as_deref() == Some(id.as_str())
    };

    let toggle = {
        let backend = backend.clone();
        let id = id.clone();
        move |_| {
            let backend = backend.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ =
                    actions::toggle_purchased(backend.as_ref(), &id, purchased, Utc::now()).await;
            });
        }
    };

    let begin_edit = {
        let item = item.clone();
        move |_| store_begin_edit(&store, &item)
    };

    let save_edit = {
        let backend = backend.clone();
        let id = id.clone();
        move |_| {
            let backend = backend.clone();
            let id = id.clone();
            let draft = store.edit_text().get();
            spawn_local(async move {
                // Whitespace-only drafts are rejected and edit mode stays open
                if let Ok(true) = actions::save_edit(backend.as_ref(), &id, &draft).await {
                    store_end_edit(&store);
                }
            });
        }
    };

    let remove = {
        let backend = backend.clone();
        let id = id.clone();
        move |_| {
            let backend = backend.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = actions::remove_item(backend.as_ref(), &id).await;
            });
        }
    };

    let editing_name = {
        let is_editing = is_editing.clone();
        move || {
            if is_editing() {
                view! {
                    <input
                        type="text"
                        class="edit-input"
                        prop:value=move || store.edit_text().get()
                        on:input=move |ev| *store.edit_text().write() = event_target_value(&ev)
                    />
                }
                .into_any()
            } else {
                view! {
                    <span class=if purchased { "grocery-item line-through" } else { "grocery-item" }>
                        {name.clone()}
                    </span>
                }
                .into_any()
            }
        }
    };

    let edit_actions = {
        let is_editing = is_editing.clone();
        move || {
            if is_editing() {
                view! {
                    <button class="save-btn" on:click=save_edit.clone()>"Save"</button>
                }
                .into_any()
            } else {
                view! {
                    <button class="edit-btn" on:click=begin_edit.clone()>"Edit"</button>
                }
                .into_any()
            }
        }
    };

    view! {
        <li class=if purchased { "grocery-row purchased" } else { "grocery-row" }>
            <div class="item-content">
                <input type="checkbox" checked=purchased on:change=toggle />
                <div class="item-details">
                    {editing_name}
                    <span class="text-xs">{created}</span>
                </div>
            </div>

            <div class="item-actions">
                {edit_actions}
                <button class="delete-btn" on:click=remove>"×"</button>
            </div>
        </li>
    }
}
