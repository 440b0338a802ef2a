//! Grocery List View
//!
//! Renders the current snapshot in server order; no client-side sort.

use leptos::prelude::*;

use crate::components::GroceryRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The item list
#[component]
pub fn GroceryListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="grocery-list">
            <For
                each=move || store.items().get()
                key=|item| {
                    // Tuple of all mutable fields so edits re-render the row
                    (
                        item.id.clone(),
                        item.name.clone(),
                        item.purchased,
                        item.checked_at,
                    )
                }
                children=move |item| {
                    view! { <GroceryRow item=item /> }
                }
            />
        </ul>
    }
}
