use anyhow::{anyhow, Result};
use wordsort_core::ClassifyError;

use crate::config::Settings;
use crate::errors::{map_classify_error, ReportedError};
use crate::handlers::session_handlers::{load_session, loaded_board};
use crate::operations::{resolve_item, SessionOperations, ValidationError};
use crate::state::AppState;
use crate::ui::{format_label, refresh_after_state_change, StatusLevel};

fn reported(error: ClassifyError) -> anyhow::Error {
    ReportedError::from(map_classify_error(&error)).into()
}

fn invalid_argument(error: ValidationError) -> anyhow::Error {
    ReportedError {
        title: "Invalid Argument".to_string(),
        message: error.message,
        details: format!("Argument: {}", error.field),
    }
    .into()
}

/// Load the session and resolve an item reference against its board
fn load_and_resolve(state: &mut AppState, reference: &str, settings: &Settings) -> Result<usize> {
    load_session(state, settings)?;
    resolve_item(loaded_board(state)?, reference).map_err(invalid_argument)
}

/// Move an item into the placed region, before `position` when given
pub fn handle_place(
    state: &mut AppState,
    reference: &str,
    position: Option<usize>,
    settings: &Settings,
) -> Result<()> {
    let index = load_and_resolve(state, reference, settings)?;

    let board = state.get_board_mut().ok_or_else(|| anyhow!("No board loaded"))?;
    board.place(index, position).map_err(reported)?;
    let label = format_label(&board.items()[index]);
    state.mark_dirty();

    SessionOperations::new(state).save()?;
    refresh_after_state_change(state, settings, &format!("Placed {}", label), StatusLevel::Success)
}

/// Return an item to the unplaced region
pub fn handle_unplace(state: &mut AppState, reference: &str, settings: &Settings) -> Result<()> {
    let index = load_and_resolve(state, reference, settings)?;

    let board = state.get_board_mut().ok_or_else(|| anyhow!("No board loaded"))?;
    let was_placed = board.items()[index].placed;
    board.unplace(index).map_err(reported)?;
    let label = format_label(&board.items()[index]);

    if !was_placed {
        refresh_after_state_change(
            state,
            settings,
            &format!("{} is not placed", label),
            StatusLevel::Warning,
        )?;
        return Ok(());
    }

    state.mark_dirty();
    SessionOperations::new(state).save()?;
    refresh_after_state_change(state, settings, &format!("Unplaced {}", label), StatusLevel::Success)
}

/// Select a placed item and print its label
pub fn handle_select(state: &mut AppState, reference: &str, settings: &Settings) -> Result<()> {
    let index = load_and_resolve(state, reference, settings)?;

    let board = state.get_board_mut().ok_or_else(|| anyhow!("No board loaded"))?;
    let label = board.select(index).map_err(reported)?.label();
    state.mark_dirty();

    SessionOperations::new(state).save()?;
    println!("{}", label);
    Ok(())
}
