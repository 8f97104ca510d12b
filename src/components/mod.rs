//! UI Components
//!
//! Leptos components for the todo page.

mod header;
mod todo_list;
mod todo_item;
mod footer;
mod error_notification;

pub use header::Header;
pub use todo_list::TodoList;
pub use todo_item::TodoItem;
pub use footer::Footer;
pub use error_notification::ErrorNotification;
