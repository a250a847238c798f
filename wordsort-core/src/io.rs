use crate::board::Board;
use crate::validation::validate_board;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a board from a JSON session file and validate it
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let board: Board = serde_json::from_str(&contents)?;

    validate_board(&board)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok(board)
}

/// Save a board to a JSON session file with pretty printing
pub fn save_board<P: AsRef<Path>>(board: &Board, path: P) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(board)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_keeps_placement() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut board = Board::classify("pear-Fig-3").unwrap();
        board.place(2, None).unwrap();
        board.place(0, Some(0)).unwrap();
        board.select(2).unwrap();

        save_board(&board, &path).unwrap();
        let loaded = load_board(&path).unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_load_rejects_inconsistent_board() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"items":[{"word":"pear","key":"a2","category":"lowercase","placed":false}]}"#,
        )
        .unwrap();

        let err = load_board(&path).unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_board(dir.path().join("missing.json")).is_err());
    }
}
