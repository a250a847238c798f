use anyhow::Result;
use std::path::Path;

use crate::errors::{map_session_load_error, map_session_save_error, ReportedError};
use crate::state::AppState;

/// Session file operations
/// Handles all session I/O and maps failures to reportable errors
pub struct SessionOperations<'a> {
    state: &'a mut AppState,
}

impl<'a> SessionOperations<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Load a session file from the given path
    pub fn load(&mut self, path: &Path) -> Result<()> {
        match self.state.load_from_file(path.to_path_buf()) {
            Ok(()) => {
                log::info!("Loaded session from {}", path.display());
                Ok(())
            }
            Err(e) => Err(ReportedError::from(map_session_load_error(&*e, path)).into()),
        }
    }

    /// Save the board to its current session file
    pub fn save(&mut self) -> Result<()> {
        match self.state.save() {
            Ok(()) => {
                log::info!("Saved session");
                Ok(())
            }
            Err(e) => {
                let path = self.state.session_file.clone();
                Err(ReportedError::from(map_session_save_error(&*e, path.as_deref())).into())
            }
        }
    }

    /// Save the board to a new session file
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        match self.state.save_as(path.to_path_buf()) {
            Ok(()) => {
                log::info!("Saved session to {}", path.display());
                Ok(())
            }
            Err(e) => Err(ReportedError::from(map_session_save_error(&*e, Some(path))).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_session_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new();
        let err = SessionOperations::new(&mut state)
            .load(&dir.path().join("none.json"))
            .unwrap_err();

        let reported = err.downcast_ref::<ReportedError>().unwrap();
        assert_eq!(reported.title, "No Session");
    }

    #[test]
    fn test_save_without_board_is_reported() {
        let mut state = AppState::new();
        let err = SessionOperations::new(&mut state).save().unwrap_err();
        let reported = err.downcast_ref::<ReportedError>().unwrap();
        assert_eq!(reported.title, "Error Saving Session");
    }

    #[test]
    fn test_save_as_then_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");

        let mut state = AppState::new();
        state.classify_input("a-B-3").unwrap();
        SessionOperations::new(&mut state).save_as(&path).unwrap();

        state.get_board_mut().unwrap().place(1, None).unwrap();
        state.mark_dirty();
        SessionOperations::new(&mut state).save().unwrap();
        assert!(!state.dirty);

        let mut reloaded = AppState::new();
        SessionOperations::new(&mut reloaded).load(&path).unwrap();
        assert_eq!(reloaded.get_board().unwrap().placed_order(), &[1]);
    }
}
