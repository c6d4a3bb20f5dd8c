use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    pub visible: bool,
}

#[function_component(MessagePopup)]
pub fn message_popup(props: &Props) -> Html {
    let class = classes!("error-popup", props.visible.then_some("visible"));
    html! {
        <div id="errorPopup" class={class} role="alert" aria-live="assertive">
            { props.text.clone() }
        </div>
    }
}
