//! Fixed values shared by the guess entry engine.

/// Number of letter slots in a guess.
pub const SLOT_COUNT: usize = 5;

/// Full guess accepted by the server: five letter/symbol pairs.
pub const GUESS_PATTERN: &str = r"^([a-z][+\-*]){5}$";

// Preference store keys ------------------------------------------------------
pub const PREF_THEME_KEY: &str = "theme";
pub const PREF_INCLUDE_EXTENDED_KEY: &str = "includeExtended";

// Stored values ----------------------------------------------------------------
pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";
pub const FLAG_TRUE: &str = "true";
pub const FLAG_FALSE: &str = "false";

// Defaults for `UiConfig` --------------------------------------------------------
pub(crate) const DEFAULT_MESSAGE_DISMISS_MS: u32 = 2_000;
pub(crate) const DEFAULT_ICON_TRANSITION_MS: u32 = 250;
pub(crate) const DEFAULT_MODAL_FADE_IN_MS: u32 = 10;
pub(crate) const DEFAULT_MODAL_FADE_OUT_MS: u32 = 300;
pub(crate) const DEFAULT_POPUP_GAP_PX: f64 = 5.0;
pub(crate) const DEFAULT_EASTER_EGG_CLICKS: u32 = 15;
pub(crate) const DEFAULT_BOUNCE_SPEED: f64 = 2.0;

// Page endpoints and assets ------------------------------------------------------
pub const RESET_PATH: &str = "/reset";
pub const SUBMIT_PATH: &str = "/";
pub const MOVING_IMAGE_SRC: &str = "/static/images/moving.gif";
