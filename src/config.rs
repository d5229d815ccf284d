//! Backdrop configuration.
//!
//! Every motion-tuning constant lives here with the stock values as defaults.
//! The follow rates in particular are feel parameters with no derivation;
//! they are exposed rather than buried in the update code.

use crate::visuals::{Fog, Palette};

/// Configuration for a backdrop scene.
///
/// Construct with [`BackdropConfig::default`] and adjust fields directly, or
/// chain the builder-style setters for the common ones:
///
/// ```ignore
/// let config = BackdropConfig::default()
///     .with_palette(Palette::Ocean)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct BackdropConfig {
    /// Number of particles in the cloud.
    pub particle_count: u32,
    /// Half-extent of the particle cloud cube; positions are uniform in
    /// [-spread, spread] per axis.
    pub spread: f32,
    /// Per-particle size range (min, max).
    pub particle_size: (f32, f32),
    /// Particle opacity.
    pub particle_opacity: f32,
    /// Wireframe shape opacity.
    pub shape_opacity: f32,
    /// Accent palette for particles and shapes.
    pub palette: Palette,
    /// Depth fog; its color doubles as the clear color.
    pub fog: Fog,
    /// Seed for procedural generation. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Per-frame fraction by which the smoothed pointer approaches the raw
    /// pointer.
    pub pointer_smoothing: f32,
    /// Per-frame fraction by which the camera approaches its pointer target.
    pub camera_follow: f32,
    /// Cloud yaw in radians per second of elapsed time.
    pub cloud_spin: f32,
    /// Cloud pitch per unit of smoothed pointer Y.
    pub cloud_tilt: f32,
    /// Per-axis shape rotation speed is uniform in [-max, max] per frame.
    pub shape_spin_max: f32,
    /// Shape float speed range (min, max), in radians per second.
    pub float_speed: (f32, f32),
    /// Vertical float amplitude.
    pub float_amplitude_y: f32,
    /// Horizontal float amplitude.
    pub float_amplitude_x: f32,
    /// How far shapes and the camera target are displaced per unit of
    /// smoothed pointer.
    pub pointer_parallax: f32,

    /// Camera vertical field of view in degrees.
    pub camera_fov_deg: f32,
    /// Camera distance from the origin along +Z.
    pub camera_depth: f32,

    /// Window title for the demo binary.
    pub title: String,
    /// Initial logical window size.
    pub window_size: (u32, u32),
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: 400,
            spread: 50.0,
            particle_size: (0.5, 2.5),
            particle_opacity: 0.8,
            shape_opacity: 0.3,
            palette: Palette::default(),
            fog: Fog::default(),
            seed: None,
            pointer_smoothing: 0.05,
            camera_follow: 0.02,
            cloud_spin: 0.03,
            cloud_tilt: 0.05,
            shape_spin_max: 0.005,
            float_speed: (0.5, 1.0),
            float_amplitude_y: 2.0,
            float_amplitude_x: 1.0,
            pointer_parallax: 2.0,
            camera_fov_deg: 75.0,
            camera_depth: 30.0,
            title: "driftfield".into(),
            window_size: (1280, 720),
        }
    }
}

impl BackdropConfig {
    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the accent palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the generation seed for a reproducible scene.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_tuning() {
        let config = BackdropConfig::default();
        assert_eq!(config.particle_count, 400);
        assert_eq!(config.pointer_smoothing, 0.05);
        assert_eq!(config.camera_follow, 0.02);
        assert_eq!(config.cloud_spin, 0.03);
        assert_eq!(config.camera_fov_deg, 75.0);
        assert_eq!(config.camera_depth, 30.0);
    }

    #[test]
    fn builder_setters_chain() {
        let config = BackdropConfig::default()
            .with_particle_count(100)
            .with_seed(9)
            .with_palette(Palette::Ocean);
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.palette, Palette::Ocean);
    }
}
