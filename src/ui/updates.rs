use anyhow::Result;
use wordsort_core::{Board, ClassifiedItem};

use crate::config::{OutputFormat, Settings};
use crate::state::AppState;
use crate::ui::dialogs::{set_status, StatusLevel};
use crate::ui::formatting::{format_board, format_items, to_json};

/// Render a classification result in the requested format
pub fn render_items(items: &[ClassifiedItem], format: OutputFormat, settings: &Settings) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_items(items)),
        OutputFormat::Json => Ok(to_json(items, settings.pretty_json)? + "\n"),
    }
}

/// Render the board held by the application state
pub fn render_board(state: &AppState, board: &Board, format: OutputFormat, settings: &Settings) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_board(board, &state.get_title())),
        OutputFormat::Json => Ok(to_json(board, settings.pretty_json)? + "\n"),
    }
}

/// Print the board after a state-changing command and report the status
pub fn refresh_after_state_change(
    state: &AppState,
    settings: &Settings,
    status_message: &str,
    level: StatusLevel,
) -> Result<()> {
    if let Some(board) = state.get_board() {
        print!("{}", render_board(state, board, settings.format, settings)?);
    }

    set_status(status_message, level);
    Ok(())
}
