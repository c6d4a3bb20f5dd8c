use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub checked: bool,
    pub on_toggle: Callback<()>,
}

/// Styled checkbox backed by the real `includeExtended` form field.
#[function_component(ExtendedCheckbox)]
pub fn extended_checkbox(props: &Props) -> Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="checkbox-row">
            <div
                id="customCheckbox"
                class={classes!("custom-checkbox", props.checked.then_some("checked"))}
                role="checkbox"
                aria-checked={props.checked.to_string()}
                aria-labelledby="include-extended-label"
                onclick={onclick}
            ></div>
            <span id="include-extended-label">{"Include extended word list"}</span>
            <input type="checkbox" id="includeExtended" name="includeExtended" class="visually-hidden" checked={props.checked} tabindex="-1" />
        </div>
    }
}
