use anyhow::{anyhow, Result};
use wordsort_core::Board;

use crate::config::{OutputFormat, Settings};
use crate::operations::SessionOperations;
use crate::state::AppState;
use crate::ui::{render_board, set_status, StatusLevel};

/// Load the configured session into the application state
pub fn load_session(state: &mut AppState, settings: &Settings) -> Result<()> {
    SessionOperations::new(state).load(&settings.session_path)
}

/// Borrow the loaded board
pub fn loaded_board(state: &AppState) -> Result<&Board> {
    state.get_board().ok_or_else(|| anyhow!("No board loaded"))
}

/// Print both board regions and the selection
pub fn handle_show(state: &mut AppState, format: Option<OutputFormat>, settings: &Settings) -> Result<()> {
    load_session(state, settings)?;

    let board = loaded_board(state)?;
    print!(
        "{}",
        render_board(state, board, settings.format_or_default(format), settings)?
    );
    Ok(())
}

/// Validate the session file
pub fn handle_check(state: &mut AppState, settings: &Settings) -> Result<()> {
    load_session(state, settings)?;

    let board = loaded_board(state)?;
    set_status(
        format!(
            "Session is valid: {} items, {} placed",
            board.len(),
            board.placed_order().len()
        ),
        StatusLevel::Success,
    );
    Ok(())
}
