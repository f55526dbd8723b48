use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::state::auto_advance::{AutoAdvance, GlooScheduler};

/// Lets a component push back the next automatic tick.
#[derive(Clone)]
pub struct AutoAdvanceHandle {
    inner: Rc<RefCell<Option<AutoAdvance<GlooScheduler>>>>,
}

impl AutoAdvanceHandle {
    pub fn restart(&self) {
        if let Some(auto) = self.inner.borrow_mut().as_mut() {
            auto.restart();
        }
    }
}

/// Emits `on_tick` every `interval_ms` while the component is mounted.
/// The timer is cancelled on unmount.
#[hook]
pub fn use_auto_advance(interval_ms: u32, on_tick: Callback<()>) -> AutoAdvanceHandle {
    let inner = use_mut_ref(|| None::<AutoAdvance<GlooScheduler>>);
    {
        let inner = inner.clone();
        use_effect_with_deps(
            move |interval_ms: &u32| {
                let tick: Rc<dyn Fn()> = Rc::new(move || on_tick.emit(()));
                let mut auto = AutoAdvance::new(GlooScheduler, *interval_ms, tick);
                auto.start();
                *inner.borrow_mut() = Some(auto);
                move || {
                    if let Some(mut auto) = inner.borrow_mut().take() {
                        auto.stop();
                    }
                }
            },
            interval_ms,
        );
    }
    AutoAdvanceHandle { inner }
}
