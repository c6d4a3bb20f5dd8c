//! Page tunables.
use crate::constants::{
    DEFAULT_BOUNCE_SPEED, DEFAULT_EASTER_EGG_CLICKS, DEFAULT_ICON_TRANSITION_MS,
    DEFAULT_MESSAGE_DISMISS_MS, DEFAULT_MODAL_FADE_IN_MS, DEFAULT_MODAL_FADE_OUT_MS,
    DEFAULT_POPUP_GAP_PX, RESET_PATH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub message_dismiss_ms: u32,
    pub icon_transition_ms: u32,
    pub modal_fade_in_ms: u32,
    pub modal_fade_out_ms: u32,
    pub popup_gap_px: f64,
    pub easter_egg_clicks: u32,
    /// Pixels per animation frame on each axis.
    pub bounce_speed: f64,
    pub reset_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_dismiss_ms: DEFAULT_MESSAGE_DISMISS_MS,
            icon_transition_ms: DEFAULT_ICON_TRANSITION_MS,
            modal_fade_in_ms: DEFAULT_MODAL_FADE_IN_MS,
            modal_fade_out_ms: DEFAULT_MODAL_FADE_OUT_MS,
            popup_gap_px: DEFAULT_POPUP_GAP_PX,
            easter_egg_clicks: DEFAULT_EASTER_EGG_CLICKS,
            bounce_speed: DEFAULT_BOUNCE_SPEED,
            reset_path: RESET_PATH.to_string(),
        }
    }
}
