use thiserror::Error;

/// Validation failures caused by user input.
///
/// The `Display` text is what the page shows in its transient message popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please select a letter")]
    NoLetterSelected,
    #[error("ERROR: Incorrect format!")]
    MalformedGuess,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_render_page_messages() {
        assert_eq!(
            InputError::NoLetterSelected.to_string(),
            "Please select a letter"
        );
        assert_eq!(
            InputError::MalformedGuess.to_string(),
            "ERROR: Incorrect format!"
        );
    }
}
