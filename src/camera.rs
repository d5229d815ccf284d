//! The backdrop camera.
//!
//! A perspective camera parked in front of the scene. It drifts a small step
//! toward a pointer-derived target each frame and always re-aims at the
//! origin, so the scene appears to lean with the cursor.

use glam::{Mat4, Vec2, Vec3};

use crate::config::BackdropConfig;

#[derive(Debug, Clone)]
pub struct Camera {
    /// Current camera position. X/Y follow the pointer; Z stays at the
    /// configured depth.
    pub position: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Camera {
    /// Create the camera at the configured depth, looking at the origin.
    pub fn new(config: &BackdropConfig, width: u32, height: u32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.camera_depth),
            aspect: width as f32 / height.max(1) as f32,
            fov_deg: config.camera_fov_deg,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Recompute the aspect ratio for a new viewport. Nothing else changes.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Step toward the pointer target by the follow fraction.
    ///
    /// Same exponential-approach shape as the pointer smoothing; depth is
    /// untouched.
    pub fn follow(&mut self, pointer: Vec2, parallax: f32, rate: f32) {
        let target = pointer * parallax;
        self.position.x += (target.x - self.position.x) * rate;
        self.position.y += (target.y - self.position.y) * rate;
    }

    /// View matrix aimed at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(&BackdropConfig::default(), 800, 600)
    }

    #[test]
    fn starts_at_depth_looking_at_origin() {
        let camera = camera();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 30.0));
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_aspect_exactly() {
        let mut camera = camera();
        camera.set_viewport(1600, 900);
        assert_eq!(camera.aspect, 1600.0 / 900.0);
    }

    #[test]
    fn zero_viewport_is_ignored() {
        let mut camera = camera();
        let before = camera.aspect;
        camera.set_viewport(0, 900);
        assert_eq!(camera.aspect, before);
    }

    #[test]
    fn follow_converges_on_pointer_target() {
        let mut camera = camera();
        for _ in 0..2000 {
            camera.follow(Vec2::new(1.0, 1.0), 2.0, 0.02);
        }
        assert!((camera.position.x - 2.0).abs() < 1e-4);
        assert!((camera.position.y - 2.0).abs() < 1e-4);
        // Depth never changes.
        assert_eq!(camera.position.z, 30.0);
    }

    #[test]
    fn follow_step_is_two_percent_of_gap() {
        let mut camera = camera();
        camera.follow(Vec2::new(1.0, 0.0), 2.0, 0.02);
        assert!((camera.position.x - 0.04).abs() < 1e-7);
    }
}
