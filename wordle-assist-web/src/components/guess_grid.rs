use wordle_assist_core::{FilledSlot, SlotView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slots: Vec<SlotView>,
    /// Fired with the grid position of a removed box once it has faded out.
    #[prop_or_default]
    pub on_removed: Callback<usize>,
}

fn filled_box(slot: FilledSlot, position: usize, leaving: bool, on_removed: &Callback<usize>) -> Html {
    let class = classes!(
        "guess-box",
        slot.tag.class_name(),
        leaving.then_some("leaving")
    );
    let style = format!("background-color: {};", slot.tag.background());
    let ontransitionend = leaving.then(|| {
        let cb = on_removed.clone();
        Callback::from(move |_: TransitionEvent| cb.emit(position))
    });
    html! {
        <div class={class} style={style} ontransitionend={ontransitionend}>
            { slot.letter.display_char().to_string() }
        </div>
    }
}

#[function_component(GuessGrid)]
pub fn guess_grid(props: &Props) -> Html {
    html! {
        <div id="guessContainer" class="guess-container" aria-label="Current guess">
            { for props.slots.iter().enumerate().map(|(idx, view)| {
                let cell = match *view {
                    SlotView::Empty => html! { <div class="placeholder-box"></div> },
                    SlotView::Filled(slot) => filled_box(slot, idx, false, &props.on_removed),
                    SlotView::Leaving(slot) => filled_box(slot, idx, true, &props.on_removed),
                };
                html! { <div key={idx} class="slot">{ cell }</div> }
            }) }
        </div>
    }
}
