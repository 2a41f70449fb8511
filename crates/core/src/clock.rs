//! Gravity clock - turns elapsed frame time into gravity steps.
//!
//! The engine itself knows nothing about wall-clock time. A host feeds the
//! milliseconds since its last frame into [`GravityClock::advance`] and passes
//! the result to `GameSession::tick`.

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    /// `interval_ms` is clamped to at least 1.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Accumulate `elapsed_ms`. Returns true (and restarts the count) once a
    /// full interval has passed.
    ///
    /// At most one step is reported per call, as with a frame-driven loop
    /// that compares against the last drop time.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut clock = GravityClock::new(100);
        let fired: Vec<bool> = (0..7).map(|_| clock.advance(16)).collect();
        // 16 * 7 = 112 >= 100 on the seventh frame.
        assert_eq!(fired, vec![false, false, false, false, false, false, true]);
        assert!(!clock.advance(16));
    }

    #[test]
    fn reset_discards_progress() {
        let mut clock = GravityClock::new(50);
        assert!(!clock.advance(40));
        clock.reset();
        assert!(!clock.advance(40));
        assert!(clock.advance(10));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut clock = GravityClock::new(0);
        assert_eq!(clock.interval_ms(), 1);
        assert!(clock.advance(1));
    }

    #[test]
    fn default_uses_one_second() {
        assert_eq!(GravityClock::default().interval_ms(), 1000);
    }
}
