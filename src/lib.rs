//! # Driftfield - Ambient 3D Backdrop
//!
//! A slow-drifting particle cloud and a handful of floating wireframe shapes,
//! rendered behind whatever your application actually does. The scene reacts
//! gently to the pointer and never demands attention.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() -> Result<(), BackdropError> {
//!     Backdrop::new(
//!         BackdropConfig::default()
//!             .with_particle_count(400)
//!             .with_palette(Palette::Indigo),
//!     )
//!     .run()
//! }
//! ```
//!
//! ## What You Get
//!
//! - A cloud of point-sprite particles scattered in a cube, slowly rotating
//!   as a whole and tilting with the pointer.
//! - Three wireframe polyhedra that tumble, bob on sine/cosine paths, and
//!   shift with the pointer in parallax.
//! - A camera that leans toward the pointer and always looks at the origin.
//! - Depth fog, additive blending, and a dark background tuned to sit behind
//!   foreground content.
//!
//! Everything is driven by elapsed time, not accumulated deltas, so the
//! motion never drifts and a paused scene resumes exactly where the clock
//! says it should be.
//!
//! ## Headless Use
//!
//! [`Scene`] owns all animation state and has no GPU types in it. Hosts that
//! bring their own renderer (or tests) can construct one directly, feed it
//! pointer positions, and call [`Scene::advance`] with any timestamp:
//!
//! ```ignore
//! let mut scene = Scene::new(BackdropConfig::default().with_seed(7), 1280, 720);
//! scene.set_pointer(Vec2::new(0.3, -0.2));
//! scene.advance(1.5);
//! ```

mod backdrop;
pub mod camera;
pub mod config;
mod error;
pub mod gpu;
pub mod input;
pub mod particles;
pub mod scene;
pub mod shapes;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use backdrop::Backdrop;
pub use camera::Camera;
pub use config::BackdropConfig;
pub use error::{BackdropError, GpuError};
pub use glam::{Vec2, Vec3};
pub use input::Pointer;
pub use particles::{ParticleCloud, PointVertex};
pub use scene::Scene;
pub use shapes::{FloatingShape, WireframeMesh};
pub use spawn::SpawnRng;
pub use time::Clock;
pub use visuals::{BlendMode, Fog, Palette};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::config::BackdropConfig;
    pub use crate::error::{BackdropError, GpuError};
    pub use crate::scene::Scene;
    pub use crate::shapes::{FloatingShape, WireframeMesh};
    pub use crate::visuals::{BlendMode, Fog, Palette};
    pub use crate::{Vec2, Vec3};
}
