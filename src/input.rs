//! Pointer tracking for the backdrop.
//!
//! The pointer is the only input the scene reacts to. Two positions are kept:
//! the raw latest position in normalized device coordinates, updated whenever
//! the host reports a cursor move, and a smoothed copy that exponentially
//! approaches the raw value once per frame. Cursor moves are last-value-wins;
//! nothing is queued between frames.

use glam::Vec2;
use winit::event::WindowEvent;

/// Raw and smoothed pointer state in normalized device coordinates.
///
/// Both axes span -1 to 1 with the origin at the window center. X increases
/// to the right, Y increases upward (flipped from window coordinates).
#[derive(Debug, Clone)]
pub struct Pointer {
    /// Latest reported position.
    raw: Vec2,
    /// Exponentially smoothed position, advanced by [`Pointer::smooth`].
    smoothed: Vec2,
    /// Window size for NDC calculation.
    window_size: (u32, u32),
}

impl Pointer {
    /// Create a pointer resting at the window center.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            window_size: (width, height),
        }
    }

    /// Latest raw position in NDC.
    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    /// Smoothed position in NDC.
    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Set the raw position directly in NDC. Useful for tests and for hosts
    /// that compute their own normalization.
    pub fn set_raw(&mut self, ndc: Vec2) {
        self.raw = ndc;
    }

    /// Update window size for NDC calculations.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Move the smoothed position a fraction of the way toward the raw value.
    ///
    /// `rate` is the per-frame approach fraction (the backdrop default is
    /// 0.05). Call exactly once per frame, before anything reads
    /// [`Pointer::smoothed`].
    pub fn smooth(&mut self, rate: f32) {
        self.smoothed += (self.raw - self.smoothed) * rate;
    }

    /// Process a winit window event. Only cursor moves are consumed.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::CursorMoved { position, .. } = event {
            let (w, h) = self.window_size;
            if w > 0 && h > 0 {
                self.raw = Vec2::new(
                    (position.x as f32 / w as f32) * 2.0 - 1.0,
                    1.0 - (position.y as f32 / h as f32) * 2.0, // Y flipped
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let pointer = Pointer::new(800, 600);
        assert_eq!(pointer.raw(), Vec2::ZERO);
        assert_eq!(pointer.smoothed(), Vec2::ZERO);
    }

    #[test]
    fn smoothing_converges_after_jump() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_raw(Vec2::new(1.0, 1.0));

        for _ in 0..300 {
            pointer.smooth(0.05);
        }

        let s = pointer.smoothed();
        assert!((s.x - 1.0).abs() < 1e-6);
        assert!((s.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn smoothing_lags_raw() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_raw(Vec2::new(1.0, 0.0));
        pointer.smooth(0.05);

        // One step covers exactly 5% of the gap.
        assert!((pointer.smoothed().x - 0.05).abs() < 1e-7);
        assert_eq!(pointer.raw().x, 1.0);
    }
}
