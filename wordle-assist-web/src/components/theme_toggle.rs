use wordle_assist_core::{IconEffect, ThemeIcon};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icon: ThemeIcon,
    #[prop_or_default]
    pub effect: Option<IconEffect>,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &Props) -> Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let icon_class = classes!(
        "fas",
        props.icon.class_name(),
        props.effect.map(IconEffect::class_name)
    );
    html! {
        <button id="theme-toggle" type="button" class="theme-toggle" aria-label="Toggle dark mode" onclick={onclick}>
            <i id="theme-icon" class={icon_class} aria-hidden="true"></i>
        </button>
    }
}
