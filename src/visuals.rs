//! Visual configuration for the backdrop.
//!
//! Palettes, blending, and fog control how the scene looks, separate from the
//! motion state that controls how it moves.

use glam::Vec3;

/// Accent palettes for particle coloring.
///
/// Each palette is three related hues; every particle picks one of the three
/// uniformly at random at spawn time. The floating shapes use the palette's
/// first color as their wireframe accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Indigo through light purple (default).
    #[default]
    Indigo,

    /// Warm oranges and a deep red.
    Ember,

    /// Cool blues and teal.
    Ocean,

    /// Desaturated grays for a quiet backdrop.
    Mono,
}

impl Palette {
    /// Get the three color stops for this palette.
    pub fn colors(&self) -> [Vec3; 3] {
        match self {
            Palette::Indigo => [
                Vec3::new(0.388, 0.400, 0.945), // Indigo
                Vec3::new(0.545, 0.361, 0.965), // Purple
                Vec3::new(0.659, 0.333, 0.969), // Light purple
            ],
            Palette::Ember => [
                Vec3::new(0.925, 0.345, 0.141), // Orange
                Vec3::new(0.980, 0.549, 0.180), // Amber
                Vec3::new(0.698, 0.133, 0.133), // Deep red
            ],
            Palette::Ocean => [
                Vec3::new(0.098, 0.463, 0.824), // Blue
                Vec3::new(0.051, 0.647, 0.914), // Sky
                Vec3::new(0.078, 0.722, 0.651), // Teal
            ],
            Palette::Mono => [
                Vec3::new(0.85, 0.85, 0.88),
                Vec3::new(0.60, 0.60, 0.65),
                Vec3::new(0.40, 0.40, 0.45),
            ],
        }
    }

    /// The accent color used for the wireframe shapes.
    pub fn accent(&self) -> Vec3 {
        self.colors()[0]
    }
}

/// Blend mode for a render pipeline.
///
/// Controls how drawn colors combine with what is already in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default). Used for the wireframe shapes.
    #[default]
    Alpha,

    /// Additive blending. Overlapping fragments brighten each other, which
    /// gives the particle cloud its glow.
    Additive,

    /// Multiplicative blending. Darkens; useful for smoky variants.
    Multiply,
}

impl BlendMode {
    /// The wgpu blend state for this mode.
    pub fn blend_state(&self) -> wgpu::BlendState {
        match self {
            BlendMode::Alpha => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
            BlendMode::Multiply => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::Dst,
                    dst_factor: wgpu::BlendFactor::Zero,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent::OVER,
            },
        }
    }

    /// Additive fragments must not occlude each other through the depth
    /// buffer.
    pub fn depth_write(&self) -> bool {
        !matches!(self, BlendMode::Additive)
    }
}

/// Linear depth fog.
///
/// Fragments fade toward `color` between `near` and `far` view-space
/// distance. The render clear color matches the fog tint so distant geometry
/// dissolves into the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Fog tint, also used as the clear color.
    pub color: Vec3,
    /// Distance where fog starts.
    pub near: f32,
    /// Distance where fog fully obscures.
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            // Near-black with a slight blue cast.
            color: Vec3::new(0.039, 0.039, 0.059),
            near: 1.0,
            far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_has_three_colors_in_range() {
        for palette in [Palette::Indigo, Palette::Ember, Palette::Ocean, Palette::Mono] {
            for color in palette.colors() {
                assert!(color.min_element() >= 0.0);
                assert!(color.max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn accent_is_first_stop() {
        assert_eq!(Palette::Indigo.accent(), Palette::Indigo.colors()[0]);
    }

    #[test]
    fn additive_skips_depth_writes() {
        assert!(!BlendMode::Additive.depth_write());
        assert!(BlendMode::Alpha.depth_write());
    }

    #[test]
    fn default_fog_spans_scene_depth() {
        let fog = Fog::default();
        assert_eq!(fog.near, 1.0);
        assert_eq!(fog.far, 100.0);
    }
}
