use wordle_assist_core::Letter;
use yew::prelude::*;

const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub selected: Option<Letter>,
    #[prop_or_default]
    pub pressed: Option<Letter>,
    pub on_key: Callback<Letter>,
    pub on_backspace: Callback<()>,
}

#[function_component(Keyboard)]
pub fn keyboard(props: &Props) -> Html {
    let key_button = |letter: Letter| {
        let class = classes!(
            "key",
            (props.selected == Some(letter)).then_some("selected"),
            (props.pressed == Some(letter)).then_some("pressed")
        );
        let onclick = {
            let cb = props.on_key.clone();
            Callback::from(move |_: MouseEvent| cb.emit(letter))
        };
        html! {
            <button type="button" class={class} data-key={letter.to_string()} onclick={onclick}>
                { letter.display_char().to_string() }
            </button>
        }
    };
    let on_backspace = {
        let cb = props.on_backspace.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let last = ROWS.len() - 1;
    html! {
        <div class="keyboard" role="group" aria-label="Letters">
            { for ROWS.iter().enumerate().map(|(row_idx, row)| html! {
                <div class="keyboard-row">
                    { for row.chars().filter_map(Letter::new).map(&key_button) }
                    if row_idx == last {
                        <button type="button" id="backspace-key" class="key-wide" aria-label="Backspace" onclick={on_backspace.clone()}>
                            {"⌫"}
                        </button>
                    }
                </div>
            }) }
        </div>
    }
}
