use anyhow::Result;
use wordsort_core::classify;

use crate::config::{OutputFormat, Settings};
use crate::errors::{map_classify_error, ReportedError};
use crate::operations::SessionOperations;
use crate::state::AppState;
use crate::ui::{refresh_after_state_change, render_items, set_status, StatusLevel};

/// Print the classification of `input` without touching the session
pub fn handle_classify(input: &str, format: Option<OutputFormat>, settings: &Settings) -> Result<()> {
    let items = classify(input).map_err(|e| ReportedError::from(map_classify_error(&e)))?;

    print!("{}", render_items(&items, settings.format_or_default(format), settings)?);
    set_status(format!("Classified {} words", items.len()), StatusLevel::Info);
    Ok(())
}

/// Classify `input` into a fresh board and save it as the session
/// Any previous session, including its placement state, is replaced.
pub fn handle_new(state: &mut AppState, input: &str, settings: &Settings) -> Result<()> {
    state
        .classify_input(input)
        .map_err(|e| ReportedError::from(map_classify_error(&e)))?;

    SessionOperations::new(state).save_as(&settings.session_path)?;

    let count = state.get_board().map_or(0, |b| b.len());
    refresh_after_state_change(
        state,
        settings,
        &format!("New session with {} words", count),
        StatusLevel::Success,
    )
}
