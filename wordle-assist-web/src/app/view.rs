use crate::app::handlers::UiHandlers;
use crate::app::state::UiHandle;
use crate::components::{
    ColorPopup, ExtendedCheckbox, GuessGrid, Header, HelpModal, Keyboard, MessagePopup,
    MovingImage,
};
use wordle_assist_core::constants::{MOVING_IMAGE_SRC, SUBMIT_PATH};
use yew::prelude::*;

pub fn render(ui: &UiHandle, handlers: &UiHandlers) -> Html {
    let controller = ui.controller.borrow();
    let config = controller.config();
    let slots: Vec<_> = controller.slots().views().collect();
    let serialized = controller.serialized_guess();
    let selection = *controller.selection();
    let prefs = controller.preferences();
    let icon = controller.icon();
    let message = controller.message();

    html! {
        <div class="page">
            <Header
                icon={icon.icon()}
                icon_effect={icon.effect()}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_help={handlers.open_help.clone()}
                on_logo={handlers.logo_click.clone()}
            />
            <main class="entry">
                <form
                    id="guessForm"
                    method="post"
                    action={SUBMIT_PATH}
                    ref={ui.form_ref.clone()}
                    onsubmit={handlers.submit.clone()}
                >
                    <GuessGrid slots={slots} on_removed={handlers.removal_done.clone()} />
                    <input type="hidden" id="hiddenGuess" name="guess" value={serialized} />
                    <ExtendedCheckbox checked={prefs.include_extended} on_toggle={handlers.toggle_extended.clone()} />
                    <button type="submit" class="submit-btn">{"Submit"}</button>
                </form>
                <Keyboard
                    selected={selection.letter()}
                    pressed={controller.pressed()}
                    on_key={handlers.key_click.clone()}
                    on_backspace={handlers.backspace.clone()}
                />
            </main>
            <ColorPopup
                position={selection.popup_position()}
                popup_ref={ui.popup_ref.clone()}
                on_choose={handlers.color_choice.clone()}
            />
            <MessagePopup text={AttrValue::from(message.text().to_string())} visible={message.is_visible()} />
            <HelpModal state={controller.modal()} dark={prefs.theme.is_dark()} />
            <MovingImage
                active={controller.easter_egg().is_active()}
                src={MOVING_IMAGE_SRC}
                speed={config.bounce_speed}
            />
        </div>
    }
}
