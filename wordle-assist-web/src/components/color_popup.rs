use wordle_assist_core::{ColorTag, PopupPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `Some` while a letter is selected.
    #[prop_or_default]
    pub position: Option<PopupPosition>,
    #[prop_or_default]
    pub popup_ref: NodeRef,
    pub on_choose: Callback<ColorTag>,
}

#[function_component(ColorPopup)]
pub fn color_popup(props: &Props) -> Html {
    let class = classes!("color-popup", props.position.is_some().then_some("visible"));
    let style = props.position.map(|pos| pos.style()).unwrap_or_default();
    html! {
        <div id="colorPopup" class={class} style={style} ref={props.popup_ref.clone()} role="menu">
            { for ColorTag::ALL.into_iter().enumerate().map(|(idx, tag)| {
                let onclick = {
                    let cb = props.on_choose.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(tag))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("color-option", tag.class_name())}
                        style={format!("background-color: {};", tag.background())}
                        title={format!("{} ({})", tag.class_name(), idx + 1)}
                        aria-label={tag.class_name()}
                        role="menuitem"
                        onclick={onclick}
                    >
                        { tag.symbol().to_string() }
                    </button>
                }
            }) }
        </div>
    }
}
