//! Page-wide listeners: physical keyboard and outside-click dismissal.
#[cfg(target_arch = "wasm32")]
use crate::app::handlers::popup_anchor;
use crate::app::state::UiHandle;
#[cfg(target_arch = "wasm32")]
use crate::dom;
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use gloo::events::EventListenerOptions;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, Event, KeyboardEvent, Node};
#[cfg(target_arch = "wasm32")]
use wordle_assist_core::{ClickTarget, KeyCommand, Letter, command_for_key};
use yew::prelude::*;

#[hook]
pub fn use_global_listeners(ui: &UiHandle) {
    let ui = ui.clone();
    use_effect_with((), move |()| {
        let listeners = install(&ui);
        move || drop(listeners)
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(_ui: &UiHandle) -> Vec<EventListener> {
    Vec::new()
}

#[cfg(target_arch = "wasm32")]
fn install(ui: &UiHandle) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let Some(window) = dom::window() else {
        return listeners;
    };

    let handle = ui.clone();
    listeners.push(EventListener::new_with_options(
        &window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                on_key_down(&handle, event);
            }
        },
    ));

    let handle = ui.clone();
    listeners.push(EventListener::new(&window, "keyup", move |event: &Event| {
        let letter = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|event| Letter::from_key(&event.key()));
        if let Some(letter) = letter {
            handle.dispatch(|controller| controller.release_key(letter));
        }
    }));

    if let Some(document) = window.document() {
        let handle = ui.clone();
        listeners.push(EventListener::new(&document, "click", move |event: &Event| {
            let target = click_target(&handle, event);
            handle.dispatch(|controller| controller.document_click(target));
        }));
    }
    listeners
}

#[cfg(target_arch = "wasm32")]
fn on_key_down(ui: &UiHandle, event: &KeyboardEvent) {
    let Some(command) = command_for_key(&event.key()) else {
        return;
    };
    if command.prevents_default() {
        event.prevent_default();
    }
    let anchor = match command {
        KeyCommand::Select(letter) => popup_anchor(ui, letter),
        _ => None,
    };
    ui.dispatch(|controller| controller.apply_key(command, anchor));
}

#[cfg(target_arch = "wasm32")]
fn click_target(ui: &UiHandle, event: &Event) -> ClickTarget {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return ClickTarget::default();
    };
    let node: &Node = &element;
    let inside_modal_content = dom::document()
        .and_then(|doc| doc.query_selector(".modal-content").ok().flatten())
        .is_some_and(|pane| pane.contains(Some(node)));
    ClickTarget {
        inside_popup: ui
            .popup_ref
            .get()
            .is_some_and(|popup| popup.contains(Some(node))),
        on_key: element.class_list().contains("key"),
        inside_modal_content,
    }
}
