mod entry;
mod extras;
mod prefs;

use crate::app::state::UiHandle;
use wordle_assist_core::{ColorTag, Letter};
use yew::prelude::*;

pub use entry::{
    build_backspace, build_color_choice, build_key_click, build_removal_done, build_submit,
    check_submission, popup_anchor,
};
pub use extras::{build_logo_click, build_open_help};
pub use prefs::{build_toggle_extended, build_toggle_theme};

#[derive(Clone)]
pub struct UiHandlers {
    pub key_click: Callback<Letter>,
    pub color_choice: Callback<ColorTag>,
    pub backspace: Callback<()>,
    pub removal_done: Callback<usize>,
    pub submit: Callback<SubmitEvent>,
    pub toggle_theme: Callback<()>,
    pub toggle_extended: Callback<()>,
    pub open_help: Callback<()>,
    pub logo_click: Callback<()>,
}

impl UiHandlers {
    #[must_use]
    pub fn new(ui: &UiHandle) -> Self {
        Self {
            key_click: build_key_click(ui),
            color_choice: build_color_choice(ui),
            backspace: build_backspace(ui),
            removal_done: build_removal_done(ui),
            submit: build_submit(ui),
            toggle_theme: build_toggle_theme(ui),
            toggle_extended: build_toggle_extended(ui),
            open_help: build_open_help(ui),
            logo_click: build_logo_click(ui),
        }
    }
}
