use crate::prefs;
use yew::prelude::*;

pub mod bootstrap;
pub mod effects;
pub mod handlers;
pub mod listeners;
pub mod state;
pub mod view;

pub use state::UiHandle;

#[function_component(App)]
pub fn app() -> Html {
    let ui = state::use_ui();
    listeners::use_global_listeners(&ui);

    let theme = ui.controller.borrow().theme();
    use_effect_with(theme, |theme| {
        prefs::apply_theme(*theme);
        || {}
    });

    let handlers = handlers::UiHandlers::new(&ui);
    view::render(&ui, &handlers)
}
