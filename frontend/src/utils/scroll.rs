use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::error::{document, window, DomError};

/// Smoothly scrolls the section with this id to the top of the viewport.
///
/// Returns `Ok(false)` when no element carries the id; that is not an error.
pub fn go_to_section(id: &str) -> Result<bool, DomError> {
    let found = document()?.get_element_by_id(id);
    Ok(scroll_if_found(found, id, |element| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }))
}

fn scroll_if_found<E>(found: Option<E>, id: &str, scroll: impl FnOnce(&E)) -> bool {
    match found {
        Some(element) => {
            scroll(&element);
            true
        }
        None => {
            log::debug!("no section #{}, nothing to scroll to", id);
            false
        }
    }
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_offset() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

/// Fire-and-forget wrapper for click handlers.
pub fn navigate_to(id: &str) {
    if let Err(e) = go_to_section(id) {
        log::warn!("scroll to #{} failed: {}", id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_section_is_a_quiet_no_op() {
        let mut scrolled = 0;
        assert!(!scroll_if_found(None::<&str>, "nowhere", |_| scrolled += 1));
        assert_eq!(scrolled, 0);
    }

    #[test]
    fn present_section_is_scrolled_once() {
        let mut scrolled = Vec::new();
        assert!(scroll_if_found(Some("products"), "products", |id| scrolled.push(*id)));
        assert_eq!(scrolled, vec!["products"]);
    }
}
