/// Mobile menu overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking a destination always dismisses the overlay. Returns the
    /// section id to scroll to.
    pub fn select<'a>(&mut self, section_id: &'a str) -> &'a str {
        self.open = false;
        section_id
    }
}

/// Whether the header should switch to its solid style.
pub fn is_scrolled(scroll_y: f64, offset_px: f64) -> bool {
    scroll_y > offset_px
}

/// Downward shift of the hero background, in px, for a page scrolled by
/// `scroll_y`. Negative offsets (overscroll bounce) do not move it.
pub fn parallax_shift(scroll_y: f64, factor: f64) -> f64 {
    scroll_y.max(0.0) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn selection_closes_the_overlay() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.select("products"), "products");
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_and_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn hero_trails_the_scroll() {
        assert_eq!(parallax_shift(0.0, 0.2), 0.0);
        assert_eq!(parallax_shift(500.0, 0.2), 100.0);
        assert_eq!(parallax_shift(-40.0, 0.2), 0.0);
        assert_eq!(parallax_shift(500.0, 0.0), 0.0);
    }

    #[test]
    fn header_switches_past_offset() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
    }
}
