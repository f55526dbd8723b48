use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;
use crate::state::viewport::RevealLatch;

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    threshold: f64,
    revealed: UseStateHandle<bool>,
) -> Result<Observation, DomError> {
    let latch = Rc::new(RefCell::new(RevealLatch::new()));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            if latch.borrow().is_revealed() {
                return;
            }
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if latch.borrow_mut().observe(entry.intersection_ratio(), threshold) {
                    revealed.set(true);
                    // latched for good, no need to keep watching
                    observer.disconnect();
                    break;
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Flips to true the first time the referenced element is at least
/// `reveal_threshold` visible, and stays true.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let threshold = config::get().reveal_threshold;
                let observation = match node.cast::<Element>() {
                    Some(element) => match observe_once(&element, threshold, revealed.clone()) {
                        Ok(observation) => Some(observation),
                        Err(e) => {
                            log::warn!("intersection observer unavailable, revealing: {}", e);
                            revealed.set(true);
                            None
                        }
                    },
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || drop(observation)
            },
            node,
        );
    }
    *revealed
}
