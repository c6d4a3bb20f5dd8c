use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Storage, Window};
use wordle_assist_core::{AnchorRect, Letter, Viewport};

/// Retrieve the global `window` object, if running in a browser.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Host builds (tests, server-side rendering) have no browser window.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn window() -> Option<Window> {
    None
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// Returns `None` outside a browser, or when storage is disabled.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    match window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {}", js_error_message(&err));
            None
        }
    }
}

/// Full page navigation to `path`.
pub fn navigate(path: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(err) = win.location().set_href(path) {
        log::warn!("navigation to {path} failed: {}", js_error_message(&err));
    }
}

#[must_use]
pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default()
}

#[must_use]
pub fn viewport() -> Option<Viewport> {
    let win = window()?;
    Some(Viewport {
        width: win.inner_width().ok()?.as_f64()?,
        height: win.inner_height().ok()?.as_f64()?,
    })
}

/// The on-screen key element for `letter`.
#[must_use]
pub fn key_element(letter: Letter) -> Option<Element> {
    let selector = format!(".key[data-key=\"{letter}\"]");
    document()?.query_selector(&selector).ok().flatten()
}

#[must_use]
pub fn bounding_rect(element: &Element) -> AnchorRect {
    let rect = element.get_bounding_client_rect();
    AnchorRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

#[must_use]
pub fn offset_width(element: Option<HtmlElement>) -> f64 {
    element.map_or(0.0, |el| f64::from(el.offset_width()))
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let list = body.class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("could not update body class {class}: {}", js_error_message(&err));
    }
}
