use crate::app::state::UiHandle;
use yew::prelude::*;

pub fn build_open_help(ui: &UiHandle) -> Callback<()> {
    let ui = ui.clone();
    Callback::from(move |()| ui.dispatch(|controller| controller.open_help()))
}

pub fn build_logo_click(ui: &UiHandle) -> Callback<()> {
    let ui = ui.clone();
    Callback::from(move |()| {
        ui.dispatch(|controller| {
            controller.logo_clicked();
        });
    })
}
