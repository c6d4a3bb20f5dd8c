use wordle_assist_core::ModalState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: ModalState,
    /// Content pane follows the page theme.
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(HelpModal)]
pub fn help_modal(props: &Props) -> Html {
    let content_ref = use_node_ref();
    let displayed = props.state.is_displayed();

    {
        let content_ref = content_ref.clone();
        use_effect_with(displayed, move |is_displayed| {
            if *is_displayed && let Some(el) = content_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.set_attribute("tabindex", "-1");
                let _ = el.focus();
            }
            || {}
        });
    }

    let style = format!(
        "display: {}; opacity: {};",
        if displayed { "flex" } else { "none" },
        props.state.opacity()
    );
    let class = classes!("modal", props.state.is_fading_out().then_some("fade-out"));
    let content_class = classes!("modal-content", props.dark.then_some("dark-mode"));

    html! {
        <div id="howToPlayModal" class={class} style={style} role="presentation" aria-hidden={(!displayed).to_string()}>
            <div
                class={content_class}
                role="dialog"
                aria-modal="true"
                aria-labelledby="how-to-play-title"
                ref={content_ref}
            >
                <h2 id="how-to-play-title">{"How to play"}</h2>
                <p>{"Enter the guess you just played, one letter at a time, and tag each letter with the color the game gave it."}</p>
                <ol>
                    <li>{"Pick a letter on the keyboard below or type it."}</li>
                    <li>{"Choose its color in the popup, or press 1 (green), 2 (yellow) or 3 (red)."}</li>
                    <li>{"Backspace closes the popup, or removes the last letter when no popup is open."}</li>
                    <li>{"Press Enter or Submit once all five letters are tagged."}</li>
                    <li>{"Escape starts over."}</li>
                </ol>
                <p class="modal-hint">{"Click anywhere outside this box to close it."}</p>
            </div>
        </div>
    }
}
