/// Browsers report crossing ratios a hair under the requested threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Once-only "has this section been seen" flag.
///
/// Flips to revealed the first time the visible ratio reaches the threshold
/// and stays there; scrolling back out never resets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection sample. Returns true only on the transition.
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        if self.revealed {
            return false;
        }
        if visible_ratio > 0.0 && visible_ratio + RATIO_TOLERANCE >= threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(0.1, 0.3));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn crossing_reports_once_and_never_resets() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(0.3, 0.3));
        assert!(!latch.observe(0.9, 0.3));
        assert!(!latch.observe(0.0, 0.3));
        assert!(latch.is_revealed());
    }

    #[test]
    fn tolerates_float_noise_at_the_threshold() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(0.2996, 0.3));
    }

    #[test]
    fn zero_threshold_needs_some_visibility() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(0.0, 0.0));
        assert!(latch.observe(0.01, 0.0));
    }
}
