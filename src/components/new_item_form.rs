//! New Item Form Component
//!
//! Input row for adding grocery items.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::backend::use_backend;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let backend = use_backend();

    let (new_item, set_new_item) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_item.get();
        let backend = backend.clone();

        spawn_local(async move {
            // Empty input is a no-op inside the action; the field is
            // cleared only once the create request went through
            if let Ok(true) = actions::add_item(backend.as_ref(), &text, Utc::now()).await {
                set_new_item.set(String::new());
            }
        });
    };

    view! {
        <form class="input-container" on:submit=add_item>
            <input
                type="text"
                placeholder="Add a new item"
                prop:value=move || new_item.get()
                on:input=move |ev| set_new_item.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
