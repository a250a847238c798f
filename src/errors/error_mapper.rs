use std::path::Path;
use wordsort_core::ClassifyError;

/// Map session loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_session_load_error(error: &dyn std::error::Error, path: &Path) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Validation failed") {
        (
            "Validation Error".to_string(),
            "The session file has validation errors.".to_string(),
            error_string,
        )
    } else if error_string.contains("No such file") {
        (
            "No Session".to_string(),
            "No saved session was found.".to_string(),
            format!(
                "Path: {}\n\nStart one with `wordsort new <WORDS>`.",
                path.display()
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        )
    } else {
        (
            "Error Loading Session".to_string(),
            "Failed to load session file.".to_string(),
            error_string,
        )
    }
}

/// Map session saving errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_session_save_error(error: &dyn std::error::Error, path: Option<&Path>) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("No file path set") {
        (
            "No File Path".to_string(),
            "No session file is set.".to_string(),
            "Pass --session or set [session] path in the config file.".to_string(),
        )
    } else if error_string.contains("Permission denied") {
        let details = if let Some(p) = path {
            format!("You don't have permission to write to:\n{}", p.display())
        } else {
            "You don't have permission to write to this file.".to_string()
        };
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            details,
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to save the session.".to_string(),
        )
    } else {
        (
            "Error Saving Session".to_string(),
            "Failed to save session file.".to_string(),
            error_string,
        )
    }
}

/// Map classification and placement errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_classify_error(error: &ClassifyError) -> (String, String, String) {
    match error {
        ClassifyError::EmptyInput => (
            "No Words".to_string(),
            "Please enter some text.".to_string(),
            "Separate words with '-', e.g. \"banana-Apple-10\".".to_string(),
        ),
        ClassifyError::IndexOutOfRange { .. } => (
            "Unknown Item".to_string(),
            "That item is not on the board.".to_string(),
            error.to_string(),
        ),
        ClassifyError::NotPlaced { .. } => (
            "Item Not Placed".to_string(),
            "Only placed items can be selected.".to_string(),
            error.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_session_hint() {
        let error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)");
        let (title, _, details) = map_session_load_error(&error, Path::new("board.json"));
        assert_eq!(title, "No Session");
        assert!(details.contains("board.json"));
        assert!(details.contains("wordsort new"));
    }

    #[test]
    fn test_validation_failure_keeps_details() {
        let error: Box<dyn std::error::Error> = "Validation failed:\nbad key".into();
        let (title, _, details) = map_session_load_error(&*error, Path::new("x.json"));
        assert_eq!(title, "Validation Error");
        assert!(details.contains("bad key"));
    }

    #[test]
    fn test_save_without_path() {
        let error: Box<dyn std::error::Error> = "No file path set".into();
        let (title, _, _) = map_session_save_error(&*error, None);
        assert_eq!(title, "No File Path");
    }

    #[test]
    fn test_empty_input_prompts_for_text() {
        let (title, message, _) = map_classify_error(&ClassifyError::EmptyInput);
        assert_eq!(title, "No Words");
        assert_eq!(message, "Please enter some text.");
    }
}
