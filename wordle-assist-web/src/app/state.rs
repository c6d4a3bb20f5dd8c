use crate::app::{bootstrap, effects};
use std::cell::RefCell;
use std::rc::Rc;
use wordle_assist_core::GuessController;
use yew::prelude::*;

/// Everything an event binding needs: the controller, a way to re-render,
/// and the elements whose live geometry or behavior the controller cannot
/// see.
#[derive(Clone)]
pub struct UiHandle {
    pub controller: Rc<RefCell<GuessController>>,
    pub refresh: UseForceUpdateHandle,
    pub form_ref: NodeRef,
    pub popup_ref: NodeRef,
}

#[hook]
pub fn use_ui() -> UiHandle {
    UiHandle {
        controller: use_mut_ref(bootstrap::initial_controller),
        refresh: use_force_update(),
        form_ref: use_node_ref(),
        popup_ref: use_node_ref(),
    }
}

impl UiHandle {
    /// Run `op` against the controller, carry out the effects it queued, and
    /// schedule a re-render.
    pub fn dispatch<R>(&self, op: impl FnOnce(&mut GuessController) -> R) -> R {
        let (out, queued) = {
            let mut controller = self.controller.borrow_mut();
            let out = op(&mut controller);
            (out, controller.drain_effects())
        };
        effects::run(self, queued);
        self.refresh.force_update();
        out
    }
}
