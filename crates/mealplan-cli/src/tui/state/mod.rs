//! App State Components
//!
//! View-only state the planner doesn't own: cursors and selection.

mod list_cursor;
mod plan_cursor;

pub use list_cursor::ListCursor;
pub use plan_cursor::PlanCursor;
