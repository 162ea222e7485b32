//! Decorative particle field for the splash screen.
//!
//! Particles are generated once from a seeded PRNG and never change, so a given
//! seed always produces the same field. Storage is a fixed-capacity
//! `heapless::Vec`.

use embedded_graphics::prelude::Size;
use heapless::Vec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MAX_PARTICLES;

/// Particle radius range in pixels (min inclusive, max exclusive).
const RADIUS_RANGE: (f32, f32) = (2.0, 6.0);

/// Particle opacity range (min inclusive, max exclusive).
const ALPHA_RANGE: (f32, f32) = (0.3, 0.8);

/// One decorative dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// Immutable set of particles placed within a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle, MAX_PARTICLES>,
    canvas: Size,
}

impl ParticleField {
    /// Generate `count` particles inside `canvas` from `seed`.
    ///
    /// `count` is capped at [`MAX_PARTICLES`].
    pub fn generate(seed: u64, count: usize, canvas: Size) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::new();
        let width = canvas.width as f32;
        let height = canvas.height as f32;

        for _ in 0..count.min(MAX_PARTICLES) {
            let particle = Particle {
                x: if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 },
                y: if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 },
                radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
                alpha: rng.gen_range(ALPHA_RANGE.0..ALPHA_RANGE.1),
            };
            // Capacity is MAX_PARTICLES and the loop is capped to it
            particles.push(particle).ok();
        }

        log::debug!("generated {} particles (seed {seed})", particles.len());
        Self { particles, canvas }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub const fn canvas(&self) -> Size {
        self.canvas
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
