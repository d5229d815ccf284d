//! Seedable randomness for scene generation.
//!
//! All randomized setup (particle positions, colors, sizes, shape motion
//! parameters) flows through one [`SpawnRng`] so a fixed seed reproduces the
//! exact same scene. With no seed given, one is drawn from OS entropy.

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source for procedural scene setup.
///
/// ```ignore
/// let mut rng = SpawnRng::seeded(7);
/// let pos = rng.range_vec3(-50.0, 50.0);
/// let size = rng.range(0.5, 2.5);
/// ```
pub struct SpawnRng {
    rng: SmallRng,
}

impl SpawnRng {
    /// Create a generator from an explicit seed. The same seed always yields
    /// the same scene.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Vector with each component independently uniform in the given range.
    pub fn range_vec3(&mut self, min: f32, max: f32) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(min..max),
            self.rng.gen_range(min..max),
            self.rng.gen_range(min..max),
        )
    }

    /// Uniformly pick one entry from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty.
    pub fn pick<T: Copy>(&mut self, entries: &[T]) -> T {
        entries[self.rng.gen_range(0..entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SpawnRng::seeded(42);
        let mut b = SpawnRng::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.range(-50.0, 50.0), b.range(-50.0, 50.0));
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = SpawnRng::seeded(1);
        for _ in 0..1000 {
            let v = rng.range(0.5, 2.5);
            assert!((0.5..2.5).contains(&v));
        }
    }

    #[test]
    fn range_vec3_stays_in_bounds() {
        let mut rng = SpawnRng::seeded(2);
        for _ in 0..100 {
            let v = rng.range_vec3(-50.0, 50.0);
            assert!(v.x >= -50.0 && v.x < 50.0);
            assert!(v.y >= -50.0 && v.y < 50.0);
            assert!(v.z >= -50.0 && v.z < 50.0);
        }
    }

    #[test]
    fn pick_selects_from_slice() {
        let mut rng = SpawnRng::seeded(3);
        let options = [1u32, 2, 3];
        for _ in 0..50 {
            assert!(options.contains(&rng.pick(&options)));
        }
    }
}
