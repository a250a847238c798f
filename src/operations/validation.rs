use wordsort_core::Board;

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Resolve an item reference to a board index
/// Accepts an item key ("a1", "b2", "n1") or a 0-based index.
pub fn resolve_item(board: &Board, reference: &str) -> Result<usize, ValidationError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ValidationError {
            field: "item".to_string(),
            message: "Item reference cannot be empty".to_string(),
        });
    }

    if let Some(index) = board.find_key(reference) {
        return Ok(index);
    }

    match reference.parse::<usize>() {
        Ok(index) if index < board.len() => Ok(index),
        Ok(index) => Err(ValidationError {
            field: "item".to_string(),
            message: format!("Index {} is out of range ({} items)", index, board.len()),
        }),
        Err(_) => Err(ValidationError {
            field: "item".to_string(),
            message: format!("No item with key '{}'", reference),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::classify("banana-Apple-10-apple").unwrap()
    }

    #[test]
    fn test_resolve_by_key() {
        assert_eq!(resolve_item(&board(), "a2"), Ok(1));
        assert_eq!(resolve_item(&board(), " n1 "), Ok(3));
    }

    #[test]
    fn test_resolve_by_index() {
        assert_eq!(resolve_item(&board(), "2"), Ok(2));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = resolve_item(&board(), "4").unwrap_err();
        assert_eq!(err.field, "item");
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_unknown_key() {
        let err = resolve_item(&board(), "b9").unwrap_err();
        assert_eq!(err.to_string(), "item: No item with key 'b9'");
    }

    #[test]
    fn test_empty_reference() {
        assert!(resolve_item(&board(), "  ").is_err());
    }
}
