pub mod dialogs;
pub mod formatting;
pub mod updates;

pub use dialogs::{set_status, show_error, StatusLevel};
pub use formatting::format_label;
pub use updates::{refresh_after_state_change, render_board, render_items};
