use crate::components::ThemeToggle;
use wordle_assist_core::{IconEffect, ThemeIcon};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icon: ThemeIcon,
    #[prop_or_default]
    pub icon_effect: Option<IconEffect>,
    pub on_toggle_theme: Callback<()>,
    pub on_help: Callback<()>,
    pub on_logo: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let on_logo = {
        let cb = props.on_logo.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_help = {
        let cb = props.on_help.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header class="page-header">
            <h1 id="logo" class="logo" onclick={on_logo}>{"Wordle Assist"}</h1>
            <div class="header-actions">
                <button id="howToPlay" type="button" class="help-trigger" aria-haspopup="dialog" onclick={on_help}>{"How to play"}</button>
                <ThemeToggle icon={props.icon} effect={props.icon_effect} on_toggle={props.on_toggle_theme.clone()} />
            </div>
        </header>
    }
}
