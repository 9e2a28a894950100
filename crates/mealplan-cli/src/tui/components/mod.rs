//! UI components
//!
//! Reusable rendering components: tab bar, status bar and toasts.

pub mod status_bar;
pub mod tab_bar;
pub mod toast;

pub use status_bar::render_status_bar;
pub use tab_bar::render_tab_bar;
pub use toast::{render_toasts, Toast, ToastQueue};
