//! Event handlers for the App
//!
//! Split across modules by concern:
//! - keyboard: tab, plan and shopping list keys
//! - popup_keys: meal form and help popup input
//! - rendering: frame drawing

mod keyboard;
mod popup_keys;
mod rendering;
