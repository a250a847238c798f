pub mod error_mapper;

pub use error_mapper::{map_classify_error, map_session_load_error, map_session_save_error};

use std::fmt;

/// An error already mapped to a user-facing title, message and details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub title: String,
    pub message: String,
    pub details: String,
}

impl From<(String, String, String)> for ReportedError {
    fn from((title, message, details): (String, String, String)) -> Self {
        Self {
            title,
            message,
            details,
        }
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for ReportedError {}
