use thiserror::Error;

/// Errors produced by classification and placement tracking
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The input yielded no non-empty token
    #[error("input contains no words")]
    EmptyInput,

    #[error("item index {index} is out of range ({len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item {index} is not placed")]
    NotPlaced { index: usize },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ClassifyError::EmptyInput.to_string(), "input contains no words");
        assert_eq!(
            ClassifyError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "item index 4 is out of range (2 items)"
        );
        assert_eq!(ClassifyError::NotPlaced { index: 1 }.to_string(), "item 1 is not placed");
    }
}
