//! Fixed-rate frame pacing for the game loop.

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacing. Overruns are not caught up: the next frame starts immediately.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_duration: Self::duration_for(fps),
            frame_start: Instant::now(),
        }
    }

    pub fn duration_for(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn start_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in a frame that has already run for `elapsed`
    pub fn pad(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    pub fn remaining(&self) -> Duration {
        self.pad(self.frame_start.elapsed())
    }

    pub fn sleep_remaining(&self) {
        let pad = self.remaining();
        if !pad.is_zero() {
            thread::sleep(pad);
        }
    }
}
