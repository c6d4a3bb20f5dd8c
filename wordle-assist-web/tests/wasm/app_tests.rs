#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};
use wordle_assist_web::app::App;
use wordle_assist_web::dom;
use yew::AppHandle;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> (web_sys::Document, AppHandle<App>) {
    let doc = dom::document().expect("document");
    let root = match doc.get_element_by_id("app") {
        Some(root) => {
            root.set_inner_html("");
            root
        }
        None => {
            let root = doc.create_element("div").expect("create app root");
            root.set_id("app");
            doc.body()
                .expect("document body")
                .append_child(&root)
                .expect("append app root");
            root
        }
    };
    let app = yew::Renderer::<App>::with_root(root).render();
    (doc, app)
}

fn dispatch_key(target: &EventTarget, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let _ = target.dispatch_event(&event);
}

async fn settle() {
    gloo::timers::future::TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn typing_a_letter_and_digit_fills_a_slot() {
    let (doc, app) = mount();
    settle().await;
    let window: EventTarget = dom::window().unwrap().into();

    dispatch_key(&window, "a");
    settle().await;
    let popup = doc.get_element_by_id("colorPopup").unwrap();
    assert!(popup.class_list().contains("visible"));

    dispatch_key(&window, "1");
    settle().await;
    let hidden = doc
        .get_element_by_id("hiddenGuess")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(hidden.value(), "a+");
    assert!(!popup.class_list().contains("visible"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn clicking_a_key_twice_closes_the_popup() {
    let (doc, app) = mount();
    settle().await;
    let key = doc
        .query_selector(".key[data-key=\"x\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();

    key.click();
    settle().await;
    assert!(doc.get_element_by_id("colorPopup").unwrap().class_list().contains("visible"));

    key.click();
    settle().await;
    assert!(!doc.get_element_by_id("colorPopup").unwrap().class_list().contains("visible"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn destroyed_app_leaves_no_live_markup() {
    let (doc, app) = mount();
    settle().await;
    assert!(doc.get_element_by_id("colorPopup").is_some());

    app.destroy();
    settle().await;
    assert!(doc.get_element_by_id("colorPopup").is_none());

    // Listeners went with the app, so stray keys touch nothing.
    let window: EventTarget = dom::window().unwrap().into();
    dispatch_key(&window, "b");
    settle().await;
    assert!(doc.get_element_by_id("hiddenGuess").is_none());
}
