pub mod file_ops;
pub mod validation;

pub use file_ops::SessionOperations;
pub use validation::{resolve_item, ValidationError};
