//! The bouncing easter-egg image.
//!
//! Position updates bypass yew: each animation frame writes `left`/`top`
//! straight onto the element so the rest of the page never re-renders.
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use gloo::render::{AnimationFrame, request_animation_frame};
#[cfg(target_arch = "wasm32")]
use rand::SeedableRng;
#[cfg(target_arch = "wasm32")]
use rand::rngs::SmallRng;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;
#[cfg(target_arch = "wasm32")]
use wordle_assist_core::{Bouncer, SpriteSize};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: bool,
    pub src: AttrValue,
    /// Pixels per frame on each axis.
    pub speed: f64,
}

#[cfg(target_arch = "wasm32")]
struct BounceLoop {
    image: HtmlElement,
    bouncer: RefCell<Bouncer>,
    frame: RefCell<Option<AnimationFrame>>,
}

#[cfg(target_arch = "wasm32")]
impl BounceLoop {
    fn start(image: HtmlElement, speed: f64) -> Option<(Rc<Self>, EventListener)> {
        let viewport = dom::viewport()?;
        // Clock-seeded; only the start position depends on it.
        let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
        let bouncer = Bouncer::random_start(&mut rng, speed, sprite_size(&image), viewport);
        let state = Rc::new(Self {
            image,
            bouncer: RefCell::new(bouncer),
            frame: RefCell::new(None),
        });

        let window = dom::window()?;
        let on_resize = Rc::clone(&state);
        let listener = EventListener::new(&window, "resize", move |_| {
            if let Some(viewport) = dom::viewport() {
                on_resize.bouncer.borrow_mut().resize(viewport);
            }
        });

        Self::schedule(&state);
        Some((state, listener))
    }

    fn schedule(state: &Rc<Self>) {
        let next = Rc::clone(state);
        let handle = request_animation_frame(move |_| {
            next.frame.borrow_mut().take();
            next.tick();
            Self::schedule(&next);
        });
        *state.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let (x, y) = {
            let mut bouncer = self.bouncer.borrow_mut();
            bouncer.set_sprite(sprite_size(&self.image));
            bouncer.step()
        };
        let style = self.image.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
fn sprite_size(image: &HtmlElement) -> SpriteSize {
    SpriteSize {
        width: f64::from(image.client_width()),
        height: f64::from(image.client_height()),
    }
}

#[function_component(MovingImage)]
pub fn moving_image(props: &Props) -> Html {
    let image_ref = use_node_ref();

    #[cfg(target_arch = "wasm32")]
    {
        let image_ref = image_ref.clone();
        let speed = props.speed;
        use_effect_with(props.active, move |active| {
            let running = if *active {
                image_ref
                    .cast::<HtmlElement>()
                    .and_then(|image| BounceLoop::start(image, speed))
            } else {
                None
            };
            move || {
                if let Some((state, listener)) = running {
                    state.stop();
                    drop(listener);
                }
            }
        });
    }

    let class = classes!("moving-gif", props.active.then_some("visible"));
    html! {
        <img id="movingGif" class={class} src={props.src.clone()} alt="" aria-hidden="true" ref={image_ref} />
    }
}
