//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame to hold a target rate
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    frame_start: Instant,
    /// Duration of the last completed frame, including the sleep
    last_frame: Duration,
}

impl FrameClock {
    pub fn new(rate: u32) -> Self {
        let rate = rate.max(1);
        Self {
            frame: Duration::from_secs(1) / rate,
            frame_start: Instant::now(),
            last_frame: Duration::ZERO,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn last_frame(&self) -> Duration {
        self.last_frame
    }

    /// Block until the current frame's budget is used up
    pub fn tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        self.last_frame = now - self.frame_start;
        self.frame_start = now;
    }
}
