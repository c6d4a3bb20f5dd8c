use crate::prefs;
use wordle_assist_core::{GuessController, UiConfig};

#[must_use]
pub fn initial_controller() -> GuessController {
    GuessController::new(UiConfig::default(), prefs::saved_preferences())
}
