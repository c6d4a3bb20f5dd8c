use crate::app::state::UiHandle;
use crate::dom;
use crate::prefs::LocalPrefs;
use web_sys::HtmlFormElement;
use wordle_assist_core::{Effect, TimerRequest};

pub fn run(ui: &UiHandle, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Persist(write) => write.apply(&mut LocalPrefs),
            Effect::Navigate(path) => dom::navigate(&path),
            Effect::RequestSubmit => request_submit(ui),
            Effect::Schedule(request) => schedule(ui, request),
        }
    }
}

fn request_submit(ui: &UiHandle) {
    let Some(form) = ui.form_ref.cast::<HtmlFormElement>() else {
        log::warn!("guess form not mounted; submit skipped");
        return;
    };
    // Goes through the submit event, so the guess is still validated.
    if let Err(err) = form.request_submit() {
        log::warn!("form submit failed: {}", dom::js_error_message(&err));
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule(ui: &UiHandle, request: TimerRequest) {
    let ui = ui.clone();
    gloo::timers::callback::Timeout::new(request.delay_ms, move || {
        ui.dispatch(|controller| controller.timer_elapsed(request.kind, request.ticket));
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule(_ui: &UiHandle, request: TimerRequest) {
    log::debug!("no timers outside the browser; dropped {:?}", request.kind);
}
