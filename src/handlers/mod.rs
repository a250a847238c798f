pub mod classify_handlers;
pub mod placement_handlers;
pub mod session_handlers;

pub use classify_handlers::{handle_classify, handle_new};
pub use placement_handlers::{handle_place, handle_select, handle_unplace};
pub use session_handlers::{handle_check, handle_show};
