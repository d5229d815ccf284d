//! The particle cloud.
//!
//! A fixed-size set of point samples spread through a cube around the origin.
//! Per-point data is immutable after generation; motion comes from a single
//! whole-cloud rotation updated each frame, which keeps the per-frame cost
//! independent of the particle count.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4};

use crate::config::BackdropConfig;
use crate::spawn::SpawnRng;

/// One point sample, laid out for direct upload as an instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// Position in cloud-local space.
    pub position: [f32; 3],
    /// Size scalar, attenuated by distance in the shader.
    pub size: f32,
    /// RGB color from the palette.
    pub color: [f32; 3],
    _pad: f32,
}

/// A batched cloud of points with a whole-cloud rotation.
#[derive(Debug, Clone)]
pub struct ParticleCloud {
    vertices: Vec<PointVertex>,
    /// Rotation about Y, a pure function of elapsed time.
    pub yaw: f32,
    /// Rotation about X, driven by the smoothed pointer.
    pub pitch: f32,
}

impl ParticleCloud {
    /// Generate the cloud from the config's palette, spread, and size range.
    pub fn generate(config: &BackdropConfig, rng: &mut SpawnRng) -> Self {
        let palette = config.palette.colors();
        let (size_min, size_max) = config.particle_size;

        let vertices = (0..config.particle_count)
            .map(|_| {
                let position = rng.range_vec3(-config.spread, config.spread);
                let color = rng.pick(&palette);
                PointVertex {
                    position: position.to_array(),
                    size: rng.range(size_min, size_max),
                    color: color.to_array(),
                    _pad: 0.0,
                }
            })
            .collect();

        Self {
            vertices,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Number of points in the cloud. Fixed for the scene lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Per-point vertex data for the GPU.
    #[inline]
    pub fn vertices(&self) -> &[PointVertex] {
        &self.vertices
    }

    /// Set the whole-cloud rotation for this frame.
    ///
    /// Yaw is an absolute function of elapsed time rather than an increment,
    /// so it never accumulates drift.
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Model matrix applying the cloud rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::Palette;

    fn cloud() -> ParticleCloud {
        let config = BackdropConfig::default().with_seed(11);
        let mut rng = SpawnRng::seeded(11);
        ParticleCloud::generate(&config, &mut rng)
    }

    #[test]
    fn generates_exact_count() {
        assert_eq!(cloud().len(), 400);
    }

    #[test]
    fn positions_within_spread() {
        for v in cloud().vertices() {
            for c in v.position {
                assert!((-50.0..50.0).contains(&c));
            }
        }
    }

    #[test]
    fn sizes_within_range() {
        for v in cloud().vertices() {
            assert!((0.5..2.5).contains(&v.size));
        }
    }

    #[test]
    fn colors_come_from_palette() {
        let palette = Palette::Indigo.colors();
        for v in cloud().vertices() {
            assert!(palette.iter().any(|c| c.to_array() == v.color));
        }
    }

    #[test]
    fn rotation_does_not_touch_vertices() {
        let mut cloud = cloud();
        let before = cloud.vertices().to_vec();
        cloud.set_rotation(1.5, -0.3);
        assert_eq!(cloud.vertices(), &before[..]);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = BackdropConfig::default();
        let a = ParticleCloud::generate(&config, &mut SpawnRng::seeded(5));
        let b = ParticleCloud::generate(&config, &mut SpawnRng::seeded(5));
        assert_eq!(a.vertices(), b.vertices());
    }
}
