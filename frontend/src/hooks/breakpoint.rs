use yew::prelude::*;

use super::WindowListener;
use crate::config;
use crate::error::{window, DomError};
use crate::state::breakpoint::is_narrow;

fn viewport_width() -> Result<f64, DomError> {
    window()?
        .inner_width()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))
}

fn current(threshold: u32) -> bool {
    match viewport_width() {
        Ok(width) => is_narrow(width, threshold),
        Err(e) => {
            log::warn!("cannot read viewport width, assuming desktop: {}", e);
            false
        }
    }
}

/// Narrow-viewport flag, recomputed on every resize event.
#[hook]
pub fn use_is_narrow() -> bool {
    let threshold = config::get().narrow_breakpoint_px;
    let narrow = use_state_eq(|| current(threshold));
    {
        let narrow = narrow.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("resize", move || narrow.set(current(threshold)))
                    .map_err(|e| log::warn!("resize listener not installed: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }
    *narrow
}
