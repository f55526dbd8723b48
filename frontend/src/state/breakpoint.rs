/// True below the single layout breakpoint.
pub fn is_narrow(width_px: f64, threshold_px: u32) -> bool {
    width_px < threshold_px as f64
}

/// How many product cards fit side by side.
pub fn visible_count(narrow: bool, mobile: usize, desktop: usize) -> usize {
    if narrow {
        mobile.max(1)
    } else {
        desktop.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(is_narrow(767.0, 768));
        assert!(!is_narrow(768.0, 768));
        assert!(!is_narrow(1440.0, 768));
    }

    #[test]
    fn visible_count_follows_layout() {
        assert_eq!(visible_count(true, 1, 3), 1);
        assert_eq!(visible_count(false, 1, 3), 3);
        assert_eq!(visible_count(false, 1, 0), 1);
    }
}
