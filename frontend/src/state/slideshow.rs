use std::rc::Rc;
use yew::Reducible;

/// Which way the last transition went. Only used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Forward => "slide-forward",
            Direction::Backward => "slide-backward",
        }
    }
}

/// One-at-a-time slider that wraps around at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
    len: usize,
    direction: Direction,
    /// Bumped on every user-initiated move; the auto-advance timer restarts
    /// whenever it changes.
    manual_moves: u64,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: Direction::Forward,
            manual_moves: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn manual_moves(&self) -> u64 {
        self.manual_moves
    }

    fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.direction = Direction::Forward;
    }

    /// Timer-driven step. Does not count as a manual move.
    pub fn auto_advance(&mut self) {
        self.step_forward();
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.manual_moves += 1;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.direction = Direction::Backward;
        self.manual_moves += 1;
    }

    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        self.direction = if index >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
        self.manual_moves += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowAction {
    Next,
    Prev,
    GoTo(usize),
    AutoAdvance,
}

impl Reducible for Slideshow {
    type Action = SlideshowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SlideshowAction::Next => next.next(),
            SlideshowAction::Prev => next.prev(),
            SlideshowAction::GoTo(index) => next.go_to(index),
            SlideshowAction::AutoAdvance => next.auto_advance(),
        }
        log::debug!("slideshow {:?} -> {}", action, next.index);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_wraps_from_last_to_first() {
        let mut slides = Slideshow::new(4);
        slides.go_to(3);
        slides.auto_advance();
        assert_eq!(slides.index(), 0);
        assert_eq!(slides.direction(), Direction::Forward);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut slides = Slideshow::new(4);
        slides.prev();
        assert_eq!(slides.index(), 3);
        assert_eq!(slides.direction(), Direction::Backward);
    }

    #[test]
    fn manual_moves_are_counted_but_auto_advance_is_not() {
        let mut slides = Slideshow::new(4);
        slides.auto_advance();
        assert_eq!(slides.manual_moves(), 0);
        slides.next();
        slides.prev();
        slides.go_to(2);
        assert_eq!(slides.manual_moves(), 3);
    }

    #[test]
    fn go_to_tracks_direction_and_clamps() {
        let mut slides = Slideshow::new(4);
        slides.go_to(2);
        assert_eq!(slides.direction(), Direction::Forward);
        slides.go_to(0);
        assert_eq!(slides.direction(), Direction::Backward);
        slides.go_to(10);
        assert_eq!(slides.index(), 3);
    }

    #[test]
    fn empty_slideshow_stays_put() {
        let mut slides = Slideshow::new(0);
        slides.next();
        slides.prev();
        slides.go_to(1);
        assert_eq!(slides.index(), 0);
        assert!(slides.is_empty());
    }

    #[test]
    fn reducer_applies_actions() {
        let slides = Rc::new(Slideshow::new(4));
        let slides = slides.reduce(SlideshowAction::Prev);
        assert_eq!(slides.index(), 3);
        let slides = slides.reduce(SlideshowAction::AutoAdvance);
        assert_eq!(slides.index(), 0);
        let slides = slides.reduce(SlideshowAction::GoTo(2));
        assert_eq!(slides.index(), 2);
        assert_eq!(slides.manual_moves(), 2);
    }
}
