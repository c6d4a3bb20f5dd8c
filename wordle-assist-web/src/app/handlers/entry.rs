use crate::app::state::UiHandle;
use crate::dom;
use wordle_assist_core::{ColorTag, Letter, PopupPosition, SelectionSource};
use yew::prelude::*;

/// Popup placement above the on-screen key for `letter`, if it is mounted.
#[must_use]
pub fn popup_anchor(ui: &UiHandle, letter: Letter) -> Option<PopupPosition> {
    let key = dom::key_element(letter)?;
    let gap = ui.controller.borrow().config().popup_gap_px;
    Some(PopupPosition::above(
        dom::bounding_rect(&key),
        dom::scroll_y(),
        dom::offset_width(ui.popup_ref.cast()),
        gap,
    ))
}

pub fn build_key_click(ui: &UiHandle) -> Callback<Letter> {
    let ui = ui.clone();
    Callback::from(move |letter: Letter| {
        // The clicked key exists, so a missing rect only happens off-browser.
        let anchor = popup_anchor(&ui, letter).unwrap_or_default();
        ui.dispatch(|controller| {
            controller.select_letter(letter, SelectionSource::OnScreenKey, anchor);
        });
    })
}

pub fn build_color_choice(ui: &UiHandle) -> Callback<ColorTag> {
    let ui = ui.clone();
    Callback::from(move |tag: ColorTag| {
        // A missing selection is reported through the message popup.
        let _ = ui.dispatch(|controller| controller.confirm_color(tag));
    })
}

pub fn build_backspace(ui: &UiHandle) -> Callback<()> {
    let ui = ui.clone();
    Callback::from(move |()| ui.dispatch(|controller| controller.handle_backspace()))
}

pub fn build_removal_done(ui: &UiHandle) -> Callback<usize> {
    let ui = ui.clone();
    Callback::from(move |position: usize| {
        ui.dispatch(|controller| {
            controller.finish_removal(position);
        });
    })
}

/// Validate the current guess. `false` means the submission must not go out.
pub fn check_submission(ui: &UiHandle) -> bool {
    ui.dispatch(|controller| controller.submit()).is_ok()
}

pub fn build_submit(ui: &UiHandle) -> Callback<SubmitEvent> {
    let ui = ui.clone();
    Callback::from(move |event: SubmitEvent| {
        if !check_submission(&ui) {
            event.prevent_default();
        }
    })
}
