//! Floating wireframe shapes.
//!
//! Three polyhedra drift around fixed anchor points: sinusoidal float plus a
//! pointer-reactive offset, with a slow unbounded tumble. Their displayed
//! position is always recomputed from the anchor; nothing else ever writes it.

use glam::{EulerRot, Mat4, Vec2, Vec3};

use crate::config::BackdropConfig;
use crate::spawn::SpawnRng;

/// A wireframe mesh as a list of line segments.
///
/// The polyhedron constructors take a circumradius, so
/// `WireframeMesh::icosahedron(2.0)` has every vertex at distance 2 from its
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeMesh {
    /// Line segments as pairs of endpoints (start, end).
    pub lines: Vec<(Vec3, Vec3)>,
}

impl WireframeMesh {
    /// Create a custom wireframe from line segments.
    pub fn custom(lines: Vec<(Vec3, Vec3)>) -> Self {
        Self { lines }
    }

    /// Tetrahedron (4 triangular faces, 6 edges).
    pub fn tetrahedron(radius: f32) -> Self {
        let s = radius / 3.0_f32.sqrt();
        let v0 = Vec3::new(s, s, s);
        let v1 = Vec3::new(s, -s, -s);
        let v2 = Vec3::new(-s, s, -s);
        let v3 = Vec3::new(-s, -s, s);

        Self {
            lines: vec![
                (v0, v1),
                (v0, v2),
                (v0, v3),
                (v1, v2),
                (v1, v3),
                (v2, v3),
            ],
        }
    }

    /// Octahedron (8 triangular faces, 12 edges).
    pub fn octahedron(radius: f32) -> Self {
        let px = Vec3::new(radius, 0.0, 0.0);
        let nx = Vec3::new(-radius, 0.0, 0.0);
        let py = Vec3::new(0.0, radius, 0.0);
        let ny = Vec3::new(0.0, -radius, 0.0);
        let pz = Vec3::new(0.0, 0.0, radius);
        let nz = Vec3::new(0.0, 0.0, -radius);

        Self {
            lines: vec![
                // Top pyramid
                (py, px),
                (py, nx),
                (py, pz),
                (py, nz),
                // Bottom pyramid
                (ny, px),
                (ny, nx),
                (ny, pz),
                (ny, nz),
                // Equator
                (px, pz),
                (pz, nx),
                (nx, nz),
                (nz, px),
            ],
        }
    }

    /// Cube (6 faces, 12 edges).
    pub fn cube(radius: f32) -> Self {
        let s = radius / 3.0_f32.sqrt();
        let v000 = Vec3::new(-s, -s, -s);
        let v001 = Vec3::new(-s, -s, s);
        let v010 = Vec3::new(-s, s, -s);
        let v011 = Vec3::new(-s, s, s);
        let v100 = Vec3::new(s, -s, -s);
        let v101 = Vec3::new(s, -s, s);
        let v110 = Vec3::new(s, s, -s);
        let v111 = Vec3::new(s, s, s);

        Self {
            lines: vec![
                // Bottom face
                (v000, v100),
                (v100, v101),
                (v101, v001),
                (v001, v000),
                // Top face
                (v010, v110),
                (v110, v111),
                (v111, v011),
                (v011, v010),
                // Vertical edges
                (v000, v010),
                (v100, v110),
                (v101, v111),
                (v001, v011),
            ],
        }
    }

    /// Icosahedron (20 triangular faces, 30 edges).
    pub fn icosahedron(radius: f32) -> Self {
        // Golden ratio; unit vertices have length sqrt(1 + phi^2).
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let s = radius / (1.0 + phi * phi).sqrt();

        let vertices = [
            Vec3::new(-1.0, phi, 0.0) * s,
            Vec3::new(1.0, phi, 0.0) * s,
            Vec3::new(-1.0, -phi, 0.0) * s,
            Vec3::new(1.0, -phi, 0.0) * s,
            Vec3::new(0.0, -1.0, phi) * s,
            Vec3::new(0.0, 1.0, phi) * s,
            Vec3::new(0.0, -1.0, -phi) * s,
            Vec3::new(0.0, 1.0, -phi) * s,
            Vec3::new(phi, 0.0, -1.0) * s,
            Vec3::new(phi, 0.0, 1.0) * s,
            Vec3::new(-phi, 0.0, -1.0) * s,
            Vec3::new(-phi, 0.0, 1.0) * s,
        ];

        // 30 unique edges.
        let edges = [
            (0, 1), (0, 5), (0, 7), (0, 10), (0, 11),
            (1, 5), (1, 7), (1, 8), (1, 9),
            (2, 3), (2, 4), (2, 6), (2, 10), (2, 11),
            (3, 4), (3, 6), (3, 8), (3, 9),
            (4, 5), (4, 9), (4, 11),
            (5, 9), (5, 11),
            (6, 7), (6, 8), (6, 10),
            (7, 8), (7, 10),
            (8, 9),
            (10, 11),
        ];

        Self {
            lines: edges.iter().map(|(i, j)| (vertices[*i], vertices[*j])).collect(),
        }
    }

    /// Get the total number of line segments.
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Get vertices as a flat f32 array for a GPU buffer.
    /// Each line is 6 floats: [x0, y0, z0, x1, y1, z1]
    pub fn to_vertices(&self) -> Vec<f32> {
        self.lines
            .iter()
            .flat_map(|(a, b)| [a.x, a.y, a.z, b.x, b.y, b.z])
            .collect()
    }
}

/// A polyhedron drifting around a fixed anchor.
#[derive(Debug, Clone)]
pub struct FloatingShape {
    /// The wireframe geometry.
    pub mesh: WireframeMesh,
    /// Fixed anchor position the float motion oscillates around.
    pub anchor: Vec3,
    /// Displayed position, recomputed every frame.
    pub position: Vec3,
    /// Accumulated Euler rotation, unbounded.
    pub rotation: Vec3,
    /// Rotation added per frame, per axis.
    pub rotation_speed: Vec3,
    /// Float frequency in radians per second.
    pub float_speed: f32,
    /// Phase offset so the shapes don't bob in unison.
    pub float_offset: f32,
}

impl FloatingShape {
    /// Create a shape at an anchor with randomized motion parameters.
    pub fn new(mesh: WireframeMesh, anchor: Vec3, config: &BackdropConfig, rng: &mut SpawnRng) -> Self {
        let max = config.shape_spin_max;
        let (fs_min, fs_max) = config.float_speed;
        Self {
            mesh,
            anchor,
            position: anchor,
            rotation: Vec3::ZERO,
            rotation_speed: rng.range_vec3(-max, max),
            float_speed: rng.range(fs_min, fs_max),
            float_offset: rng.range(0.0, std::f32::consts::TAU),
        }
    }

    /// The three stock shapes at their fixed anchors.
    pub fn stock_trio(config: &BackdropConfig, rng: &mut SpawnRng) -> Vec<FloatingShape> {
        vec![
            FloatingShape::new(
                WireframeMesh::icosahedron(2.0),
                Vec3::new(-15.0, 8.0, -10.0),
                config,
                rng,
            ),
            FloatingShape::new(
                WireframeMesh::octahedron(1.5),
                Vec3::new(18.0, -5.0, -15.0),
                config,
                rng,
            ),
            FloatingShape::new(
                WireframeMesh::tetrahedron(1.8),
                Vec3::new(12.0, 10.0, -12.0),
                config,
                rng,
            ),
        ]
    }

    /// Advance one frame: tumble, float around the anchor, lean toward the
    /// pointer.
    ///
    /// The position is always anchor + oscillation + pointer offset; it is
    /// never integrated, so there is no drift over long sessions.
    pub fn update(&mut self, t: f32, pointer: Vec2, config: &BackdropConfig) {
        // Euler integration, no clamping; rotation wraps naturally.
        self.rotation += self.rotation_speed;

        let float_y = (t * self.float_speed + self.float_offset).sin() * config.float_amplitude_y;
        let float_x = (t * self.float_speed * 0.5 + self.float_offset).cos() * config.float_amplitude_x;

        self.position = Vec3::new(
            self.anchor.x + float_x + pointer.x * config.pointer_parallax,
            self.anchor.y + float_y + pointer.y * config.pointer_parallax,
            self.anchor.z,
        );
    }

    /// Model matrix: accumulated rotation then translation to the displayed
    /// position.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackdropConfig {
        BackdropConfig::default()
    }

    fn shape_with_zero_phase() -> FloatingShape {
        let mut shape = FloatingShape::new(
            WireframeMesh::octahedron(1.5),
            Vec3::new(18.0, -5.0, -15.0),
            &config(),
            &mut SpawnRng::seeded(4),
        );
        shape.float_offset = 0.0;
        shape
    }

    #[test]
    fn polyhedra_edge_counts() {
        assert_eq!(WireframeMesh::tetrahedron(1.8).line_count(), 6);
        assert_eq!(WireframeMesh::octahedron(1.5).line_count(), 12);
        assert_eq!(WireframeMesh::cube(1.0).line_count(), 12);
        assert_eq!(WireframeMesh::icosahedron(2.0).line_count(), 30);
    }

    #[test]
    fn polyhedra_vertices_sit_on_circumsphere() {
        for (mesh, radius) in [
            (WireframeMesh::tetrahedron(1.8), 1.8),
            (WireframeMesh::octahedron(1.5), 1.5),
            (WireframeMesh::icosahedron(2.0), 2.0),
            (WireframeMesh::cube(1.0), 1.0),
        ] {
            for (a, b) in &mesh.lines {
                assert!((a.length() - radius).abs() < 1e-5);
                assert!((b.length() - radius).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn to_vertices_flattens_six_floats_per_line() {
        let mesh = WireframeMesh::octahedron(1.5);
        assert_eq!(mesh.to_vertices().len(), mesh.line_count() as usize * 6);
    }

    #[test]
    fn zero_phase_at_origin_rests_on_anchor_y() {
        let mut shape = shape_with_zero_phase();
        shape.update(0.0, Vec2::ZERO, &config());
        // sin(0) = 0, so the vertical oscillation vanishes exactly.
        assert_eq!(shape.position.y, shape.anchor.y);
    }

    #[test]
    fn horizontal_float_peaks_at_t_zero() {
        let mut shape = shape_with_zero_phase();
        shape.update(0.0, Vec2::ZERO, &config());
        // cos(0) = 1 at amplitude 1.
        assert_eq!(shape.position.x, shape.anchor.x + 1.0);
        assert_eq!(shape.position.z, shape.anchor.z);
    }

    #[test]
    fn pointer_offset_adds_on_top_of_float() {
        let cfg = config();
        let mut base = shape_with_zero_phase();
        let mut offset = base.clone();

        base.update(1.2, Vec2::ZERO, &cfg);
        offset.update(1.2, Vec2::new(0.5, -0.25), &cfg);

        assert!((offset.position.x - (base.position.x + 1.0)).abs() < 1e-6);
        assert!((offset.position.y - (base.position.y - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn rotation_accumulates_without_bound() {
        let cfg = config();
        let mut shape = shape_with_zero_phase();
        shape.rotation_speed = Vec3::new(0.01, 0.02, -0.01);

        for _ in 0..1000 {
            shape.update(0.0, Vec2::ZERO, &cfg);
        }

        assert!((shape.rotation.x - 10.0).abs() < 1e-3);
        assert!((shape.rotation.y - 20.0).abs() < 1e-3);
        assert!((shape.rotation.z + 10.0).abs() < 1e-3);
    }

    #[test]
    fn stock_trio_has_three_shapes() {
        let trio = FloatingShape::stock_trio(&config(), &mut SpawnRng::seeded(1));
        assert_eq!(trio.len(), 3);
        assert_eq!(trio[0].mesh.line_count(), 30);
        assert_eq!(trio[1].mesh.line_count(), 12);
        assert_eq!(trio[2].mesh.line_count(), 6);
    }
}
