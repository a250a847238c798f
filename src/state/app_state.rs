use std::error::Error;
use std::path::{Path, PathBuf};
use wordsort_core::*;

/// Application state management
/// Owns the board and where it is persisted; handlers receive it explicitly
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently loaded board
    pub board: Option<Board>,
    /// Path to current session file
    pub session_file: Option<PathBuf>,
    /// Whether there are unsaved changes
    pub dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a board from a session file
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), Box<dyn Error>> {
        let board = load_board(&path)?;

        self.board = Some(board);
        self.session_file = Some(path);
        self.dirty = false;

        Ok(())
    }

    /// Save board to current session file
    pub fn save(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(ref board) = self.board {
            if let Some(ref path) = self.session_file {
                save_board(board, path)?;
                self.dirty = false;
                Ok(())
            } else {
                Err("No file path set".into())
            }
        } else {
            Err("No board to save".into())
        }
    }

    /// Save board to a new session file
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), Box<dyn Error>> {
        if let Some(ref board) = self.board {
            save_board(board, &path)?;
            self.session_file = Some(path);
            self.dirty = false;
            Ok(())
        } else {
            Err("No board to save".into())
        }
    }

    /// Replace the board with a fresh classification of `input`
    /// All previous placement and selection state is discarded.
    pub fn classify_input(&mut self, input: &str) -> Result<(), ClassifyError> {
        let board = Board::classify(input)?;

        self.board = Some(board);
        self.dirty = true;

        Ok(())
    }

    /// Mark state as modified
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Title line with session file name and dirty indicator
    pub fn get_title(&self) -> String {
        let file_name = self
            .session_file
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        let dirty_marker = if self.dirty { "*" } else { "" };

        format!("wordsort - {}{}", file_name, dirty_marker)
    }

    /// Get a reference to the board
    pub fn get_board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Get a mutable reference to the board
    pub fn get_board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_replaces_board() {
        let mut state = AppState::new();
        state.classify_input("b-a").unwrap();
        state.get_board_mut().unwrap().place(0, None).unwrap();

        state.classify_input("c-d").unwrap();
        let board = state.get_board().unwrap();
        assert_eq!(board.items()[0].word, "c");
        assert!(board.placed_order().is_empty());
        assert!(state.dirty);
    }

    #[test]
    fn test_empty_input_keeps_previous_board() {
        let mut state = AppState::new();
        state.classify_input("word").unwrap();
        assert_eq!(state.classify_input(" - "), Err(ClassifyError::EmptyInput));
        assert_eq!(state.get_board().unwrap().len(), 1);
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut state = AppState::new();
        state.classify_input("word").unwrap();
        let err = state.save().unwrap_err();
        assert_eq!(err.to_string(), "No file path set");
    }

    #[test]
    fn test_save_as_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut state = AppState::new();
        state.classify_input("Kiwi-lime").unwrap();
        state.save_as(path.clone()).unwrap();
        assert!(!state.dirty);
        assert_eq!(state.get_title(), "wordsort - session.json");

        let mut reloaded = AppState::new();
        reloaded.load_from_file(path).unwrap();
        assert_eq!(reloaded.board, state.board);
    }

    #[test]
    fn test_title_marks_dirty() {
        let mut state = AppState::new();
        assert_eq!(state.get_title(), "wordsort - Untitled");
        state.mark_dirty();
        assert_eq!(state.get_title(), "wordsort - Untitled*");
    }
}
