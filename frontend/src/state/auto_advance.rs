use gloo_timers::callback::Interval;
use std::rc::Rc;

/// Source of recurring timers. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, interval_ms: u32, tick: Rc<dyn Fn()>) -> Self::Handle;
}

/// Browser timers via `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, interval_ms: u32, tick: Rc<dyn Fn()>) -> Interval {
        Interval::new(interval_ms, move || tick())
    }
}

/// Recurring tick that can be pushed back by user activity.
///
/// `restart` drops the outstanding timer and schedules a fresh one, so the
/// next tick always lands a full interval after the last call.
pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    on_tick: Rc<dyn Fn()>,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S, interval_ms: u32, on_tick: Rc<dyn Fn()>) -> Self {
        Self {
            scheduler,
            interval_ms,
            on_tick,
            handle: None,
        }
    }

    /// Starts ticking unless already running.
    pub fn start(&mut self) {
        if self.handle.is_none() {
            self.handle = Some(self.scheduler.every(self.interval_ms, self.on_tick.clone()));
        }
    }

    pub fn restart(&mut self) {
        self.handle = None;
        self.start();
    }

    pub fn stop(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::slideshow::Slideshow;
    use std::cell::{Cell, RefCell};

    struct VirtualTimer {
        period: u64,
        next_due: u64,
        tick: Rc<dyn Fn()>,
        live: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        timers: Vec<VirtualTimer>,
    }

    /// Deterministic scheduler driven by `advance_to`.
    #[derive(Clone, Default)]
    struct VirtualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    struct VirtualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for VirtualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl Scheduler for VirtualScheduler {
        type Handle = VirtualHandle;

        fn every(&self, interval_ms: u32, tick: Rc<dyn Fn()>) -> VirtualHandle {
            let live = Rc::new(Cell::new(true));
            let mut clock = self.clock.borrow_mut();
            let next_due = clock.now + interval_ms as u64;
            clock.timers.push(VirtualTimer {
                period: interval_ms as u64,
                next_due,
                tick,
                live: live.clone(),
            });
            VirtualHandle { live }
        }
    }

    impl VirtualScheduler {
        fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        fn advance_to(&self, target: u64) {
            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    clock.timers.retain(|t| t.live.get());
                    let next = clock
                        .timers
                        .iter_mut()
                        .filter(|t| t.next_due <= target)
                        .min_by_key(|t| t.next_due);
                    let fired = next.map(|timer| {
                        let at = timer.next_due;
                        timer.next_due += timer.period;
                        (at, timer.tick.clone())
                    });
                    fired
                };
                match due {
                    Some((at, tick)) => {
                        self.clock.borrow_mut().now = at;
                        tick();
                    }
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    fn rig(interval_ms: u32) -> (VirtualScheduler, Rc<RefCell<Slideshow>>, AutoAdvance<VirtualScheduler>) {
        let scheduler = VirtualScheduler::default();
        let slides = Rc::new(RefCell::new(Slideshow::new(4)));
        let tick = {
            let slides = slides.clone();
            Rc::new(move || slides.borrow_mut().auto_advance()) as Rc<dyn Fn()>
        };
        let auto = AutoAdvance::new(scheduler.clone(), interval_ms, tick);
        (scheduler, slides, auto)
    }

    #[test]
    fn ticks_every_interval() {
        let (clock, slides, mut auto) = rig(8000);
        auto.start();
        clock.advance_to(7999);
        assert_eq!(slides.borrow().index(), 0);
        clock.advance_to(8000);
        assert_eq!(slides.borrow().index(), 1);
        clock.advance_to(24000);
        assert_eq!(slides.borrow().index(), 3);
        clock.advance_to(32000);
        assert_eq!(slides.borrow().index(), 0);
    }

    #[test]
    fn manual_move_postpones_next_tick_by_full_interval() {
        let (clock, slides, mut auto) = rig(8000);
        auto.start();
        clock.advance_to(8000);
        assert_eq!(slides.borrow().index(), 1);

        clock.advance_to(8500);
        slides.borrow_mut().next();
        auto.restart();
        assert_eq!(slides.borrow().index(), 2);

        // the cancelled timer would have fired here
        clock.advance_to(16000);
        assert_eq!(slides.borrow().index(), 2);

        clock.advance_to(8500 + 8000 - 1);
        assert_eq!(slides.borrow().index(), 2);
        clock.advance_to(8500 + 8000);
        assert_eq!(slides.borrow().index(), 3);
        assert_eq!(clock.now(), 16500);
    }

    #[test]
    fn start_is_idempotent() {
        let (clock, slides, mut auto) = rig(1000);
        auto.start();
        auto.start();
        clock.advance_to(1000);
        assert_eq!(slides.borrow().index(), 1);
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let (clock, slides, mut auto) = rig(1000);
        auto.start();
        auto.stop();
        clock.advance_to(10_000);
        assert_eq!(slides.borrow().index(), 0);
        auto.start();
        clock.advance_to(11_000);
        assert_eq!(slides.borrow().index(), 1);
    }

    #[test]
    fn dropping_the_controller_cancels() {
        let (clock, slides, mut auto) = rig(1000);
        auto.start();
        drop(auto);
        clock.advance_to(5000);
        assert_eq!(slides.borrow().index(), 0);
    }
}
