// Public modules
pub mod board;
pub mod classify;
pub mod error;
pub mod grouping;
pub mod io;
pub mod models;
pub mod placement;
pub mod sorting;
pub mod tokenize;
pub mod validation;

// Re-export commonly used types for convenience
pub use board::Board;
pub use classify::{categorize, classify};
pub use error::ClassifyError;
pub use grouping::{assign_keys, group_by_category, Buckets};
pub use io::{load_board, save_board};
pub use models::{Category, ClassifiedItem};
pub use placement::{move_placement, unplaced_items};
pub use sorting::{compare_lexical, compare_numeric, sort_bucket};
pub use tokenize::tokenize;
pub use validation::validate_board;
