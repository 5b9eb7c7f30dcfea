//! Shared Leptos Widgets
//!
//! Toast notifications, pagination, inline delete confirmation, and the
//! file-reading helper used by both apps.

mod confirm_button;
mod file;
mod pagination;
mod toast;

pub use confirm_button::ConfirmButton;
pub use file::read_file_bytes;
pub use pagination::{clamp_page, page_count, Pagination};
pub use toast::{provide_toasts, use_toasts, Toast, ToastLevel, ToastStore, Toasts};
