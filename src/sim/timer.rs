//! Periodic interval detector for time-based spawns

/// Fires once every `interval` accumulated ticks
#[derive(Debug, Clone)]
pub struct Timer {
    interval: u32,
    elapsed: u32,
}

impl Timer {
    pub fn new(interval: u32) -> Self {
        assert!(interval > 0, "timer interval must be non-zero");
        Self {
            interval,
            elapsed: 0,
        }
    }

    /// Accumulate `elapsed` ticks; returns true (and restarts) when the
    /// interval has been reached.
    pub fn looped(&mut self, elapsed: u32) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    /// Ticks accumulated since the last fire
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fires_every_interval() {
        let mut timer = Timer::new(300);
        let fired: Vec<u32> = (1..=900).filter(|_| timer.looped(1)).collect();
        assert_eq!(fired.len(), 3);
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn test_large_step_fires_once() {
        let mut timer = Timer::new(10);
        assert!(timer.looped(25));
        // The overshoot is discarded, not carried
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.looped(9));
        assert!(timer.looped(1));
    }

    proptest! {
        #[test]
        fn prop_one_fire_per_interval(interval in 1u32..50, calls in 1usize..500) {
            let mut timer = Timer::new(interval);
            let fires = (0..calls).filter(|_| timer.looped(1)).count();
            prop_assert_eq!(fires, calls / interval as usize);
        }
    }
}
