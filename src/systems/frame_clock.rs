//! Frame statistics
//!
//! Counts frames between redraws and reports the rate at a fixed interval.

use std::time::{Duration, Instant};

/// Frames per second over one reporting window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub fps: f32,
}

/// Counts frames and reports the rate once per interval
pub struct FrameClock {
    interval: Duration,
    window_start: Instant,
    frames: u64,
}

impl FrameClock {
    /// Create a clock reporting every `interval_secs`; zero or invalid disables reports
    pub fn new(interval_secs: f32) -> Self {
        Self::starting_at(interval_secs, Instant::now())
    }

    fn starting_at(interval_secs: f32, now: Instant) -> Self {
        let interval = Duration::try_from_secs_f32(interval_secs).unwrap_or(Duration::ZERO);
        Self {
            interval,
            window_start: now,
            frames: 0,
        }
    }

    /// Record one frame, returning stats when an interval has elapsed
    pub fn tick(&mut self) -> Option<FrameStats> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<FrameStats> {
        self.frames += 1;
        if self.interval.is_zero() {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let stats = FrameStats {
            frames: self.frames,
            fps: self.frames as f32 / elapsed.as_secs_f32(),
        };
        self.window_start = now;
        self.frames = 0;
        Some(stats)
    }

    /// Record a frame and log stats at debug level when due
    pub fn tick_and_log(&mut self, live_assets: usize) {
        if let Some(stats) = self.tick() {
            log::debug!(
                "{:.1} fps ({} frames), {} assets",
                stats.fps,
                stats.frames,
                live_assets
            );
        }
    }
}
