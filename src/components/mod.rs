//! UI Components
//!
//! Reusable Leptos components.

mod grocery_list;
mod grocery_row;
mod new_item_form;

pub use grocery_list::GroceryListView;
pub use grocery_row::GroceryRow;
pub use new_item_form::NewItemForm;
