mod auto_advance;
mod breakpoint;
mod in_view;
mod scroll;

pub use auto_advance::use_auto_advance;
pub use breakpoint::use_is_narrow;
pub use in_view::use_in_view;
pub use scroll::{use_scroll_y, use_scrolled};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{window, DomError};

/// `addEventListener` on the window, removed again on drop.
pub(crate) struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub(crate) fn new(event: &'static str, callback: impl Fn() + 'static) -> Result<Self, DomError> {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(callback);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
