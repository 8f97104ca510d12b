//! Domain Layer
//!
//! Todo records, view-level derivations and the error banner.
//! Nothing here performs I/O.

mod todo;
mod message;
pub mod filter;
pub mod banner;
pub mod edit;

pub use todo::{Todo, NewTodo, TodoPatch, PLACEHOLDER_ID, USER_ID};
pub use message::ErrorMessage;
pub use filter::{FilterOption, filtered_todos, active_count, has_completed, all_completed, status_of};
pub use banner::{ErrorBanner, BannerState, BannerTicket, ERROR_DISMISS_DELAY};
pub use edit::{EditOutcome, resolve_edit, normalize_input};
