//! Frame timing for the backdrop.
//!
//! A single monotonic clock owns elapsed time since scene start. It is read
//! once per frame and never reset while the backdrop runs. Uses `std::time`
//! for high-precision timing with no external dependencies.

use std::time::Instant;

/// Monotonic clock driving the frame loop.
///
/// Tracks elapsed seconds since creation, the per-frame delta, and a frame
/// counter. A fixed delta can be installed for deterministic stepping in
/// tests, in which case elapsed time accumulates by that fixed amount instead
/// of following the wall clock.
#[derive(Debug)]
pub struct Clock {
    /// When the clock was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total elapsed time in seconds.
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Fixed delta time for deterministic updates (tests).
    fixed_delta: Option<f32>,
}

impl Clock {
    /// Create a new clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Advance the clock by one frame. Call once per rendered frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();

        match self.fixed_delta {
            Some(dt) => {
                // Deterministic mode: elapsed accumulates by the fixed step.
                self.delta_secs = dt;
                self.elapsed_secs += dt;
            }
            None => {
                self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
            }
        }

        self.last_frame = now;
        self.frame_count += 1;

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Install a fixed delta time for deterministic stepping.
    ///
    /// Pass `None` to return to wall-clock timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
