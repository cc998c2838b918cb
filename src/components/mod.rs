//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod confirm_delete_button;
mod pagination;
mod badge;
mod search_box;
mod loading_row;
mod layout;
mod form;

pub use modal::Modal;
pub use confirm_delete_button::ConfirmDeleteButton;
pub use pagination::Pagination;
pub use badge::StatusBadge;
pub use search_box::SearchBox;
pub use loading_row::{EmptyRow, LoadingRow};
pub use layout::DashboardLayout;
pub use form::{EditorActions, ErrorBanner, Field};
