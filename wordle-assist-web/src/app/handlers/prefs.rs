use crate::app::state::UiHandle;
use yew::prelude::*;

pub fn build_toggle_theme(ui: &UiHandle) -> Callback<()> {
    let ui = ui.clone();
    Callback::from(move |()| ui.dispatch(|controller| controller.toggle_theme()))
}

pub fn build_toggle_extended(ui: &UiHandle) -> Callback<()> {
    let ui = ui.clone();
    Callback::from(move |()| ui.dispatch(|controller| controller.toggle_include_extended()))
}
