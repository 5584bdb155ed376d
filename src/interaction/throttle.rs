use std::time::{Duration, Instant};

/// Default minimum spacing between accepted pointer moves (about one 60 Hz frame).
pub const DEFAULT_POINTER_THROTTLE: Duration = Duration::from_millis(16);

/// Drops pointer moves that arrive sooner than `min_interval` after the last
/// accepted one. Dropped moves are discarded, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerThrottle {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl Default for PointerThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_THROTTLE)
    }
}

impl PointerThrottle {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    #[must_use]
    pub fn min_interval(self) -> Duration {
        self.min_interval
    }

    #[must_use]
    pub fn last_accepted(self) -> Option<Instant> {
        self.last_accepted
    }

    /// Returns `true` and records `now` when the move should be processed.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Forgets the last accepted move so the next one always passes.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::PointerThrottle;

    #[test]
    fn moves_inside_the_interval_are_dropped() {
        let mut throttle = PointerThrottle::new(Duration::from_millis(16));
        let start = Instant::now();
        assert!(throttle.accept(start));
        assert!(!throttle.accept(start + Duration::from_millis(5)));
        assert!(!throttle.accept(start + Duration::from_millis(15)));
        assert!(throttle.accept(start + Duration::from_millis(16)));
        assert!(!throttle.accept(start + Duration::from_millis(20)));
    }

    #[test]
    fn reset_lets_the_next_move_through() {
        let mut throttle = PointerThrottle::default();
        let start = Instant::now();
        assert!(throttle.accept(start));
        throttle.reset();
        assert!(throttle.accept(start + Duration::from_millis(1)));
    }

    #[test]
    fn zero_interval_accepts_everything() {
        let mut throttle = PointerThrottle::new(Duration::ZERO);
        let start = Instant::now();
        assert!(throttle.accept(start));
        assert!(throttle.accept(start));
    }
}
