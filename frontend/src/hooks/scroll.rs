use yew::prelude::*;

use super::WindowListener;
use crate::state::navigation::is_scrolled;
use crate::utils::scroll::scroll_offset;

/// Current vertical page offset, updated on every window scroll.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| 0.0_f64);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Ok(y) = scroll_offset() {
                        scroll_y.set(y);
                    }
                };
                update();
                let listener = WindowListener::new("scroll", update)
                    .map_err(|e| log::warn!("scroll listener not installed: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }
    *scroll_y
}

/// True once the page has scrolled further than `offset_px`.
#[hook]
pub fn use_scrolled(offset_px: f64) -> bool {
    is_scrolled(use_scroll_y(), offset_px)
}
