//! Session timing utilities

use std::time::{Duration, Instant};

/// Tracks elapsed session time and per-frame deltas.
///
/// The demo trajectory and the frame step both read elapsed time from here
/// rather than sampling the OS clock themselves, so a session has a single
/// time origin.
pub struct SessionClock {
    start: Instant,
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
}

impl SessionClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Seconds since the session started.
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
