/// Paged carousel that stops at both edges.
///
/// `index` is the first visible item and always lies in `0..=max_index()`,
/// where `max_index` is `item_count - visible_count` (or 0 when everything
/// fits on one page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    item_count: usize,
    visible_count: usize,
}

impl Carousel {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            index: 0,
            item_count,
            visible_count: visible_count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Number of distinct positions, used for the dot indicators.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.max_index());
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    /// A layout change invalidates the current page, so the index returns to 0.
    pub fn set_visible_count(&mut self, visible_count: usize) {
        let visible_count = visible_count.max(1);
        if visible_count != self.visible_count {
            self.visible_count = visible_count;
            self.index = 0;
        }
    }

    /// Swap in a new item set (after a filter change) and rewind.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.index = 0;
    }

    /// Index range of the items currently on screen.
    pub fn window(&self) -> std::ops::Range<usize> {
        let end = (self.index + self.visible_count).min(self.item_count);
        self.index.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_bounds_for_any_walk() {
        for item_count in 0..8 {
            for visible in 1..5 {
                let mut carousel = Carousel::new(item_count, visible);
                let max = item_count.saturating_sub(visible);
                // a fixed pseudo-random walk of next/prev
                for step in 0..40usize {
                    if (step * 7 + item_count) % 3 == 0 {
                        carousel.prev();
                    } else {
                        carousel.next();
                    }
                    assert!(carousel.index() <= max, "{} > {}", carousel.index(), max);
                }
            }
        }
    }

    #[test]
    fn next_then_prev_is_inverse_in_interior() {
        let mut carousel = Carousel::new(10, 3);
        carousel.go_to(4);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 4);
        carousel.prev();
        carousel.next();
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn clamps_at_edges() {
        let mut carousel = Carousel::new(5, 3);
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.can_next());
        assert!(carousel.can_prev());
    }

    #[test]
    fn fewer_items_than_slots_pins_to_zero() {
        let mut carousel = Carousel::new(2, 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.page_count(), 1);
        assert_eq!(carousel.window(), 0..2);
    }

    #[test]
    fn go_to_clamps() {
        let mut carousel = Carousel::new(6, 3);
        carousel.go_to(99);
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.window(), 3..6);
    }

    #[test]
    fn visible_count_change_rewinds() {
        let mut carousel = Carousel::new(6, 1);
        carousel.go_to(4);
        carousel.set_visible_count(1);
        assert_eq!(carousel.index(), 4);
        carousel.set_visible_count(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.max_index(), 3);
    }

    #[test]
    fn reset_rewinds_and_resizes() {
        let mut carousel = Carousel::new(6, 3);
        carousel.go_to(3);
        carousel.reset(4);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.max_index(), 1);
    }

    #[test]
    fn empty_carousel_has_empty_window() {
        let carousel = Carousel::new(0, 3);
        assert_eq!(carousel.window(), 0..0);
        assert_eq!(carousel.max_index(), 0);
    }
}
