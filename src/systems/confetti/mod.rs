//! Confetti burst simulation
//!
//! A burst spawns `count` particles at the origin with a random launch angle and
//! speed, then advances them with a fixed nominal step until each one leaves the
//! bounding box. The step is a fixed nominal value, not the measured frame time.

mod burst;
mod particle;
mod style;

pub use burst::{spawn_particles, Burst};
pub use particle::{Particle, ParticleFate};
pub use style::ParticleStyle;

/// Tunables for one burst. Defaults reproduce the site's look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiSettings {
    /// Particles per burst
    pub count: usize,
    /// Launch speed range [min, max)
    pub min_speed: f64,
    pub max_speed: f64,
    /// Added to vy every frame
    pub gravity: f64,
    /// Nominal seconds per frame
    pub frame_step: f64,
    /// Removal threshold on |x| or |y|
    pub bound: f64,
    /// Manhattan distance at which opacity reaches zero
    pub fade_distance: f64,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            count: 50,
            min_speed: 100.0,
            max_speed: 400.0,
            gravity: 0.5,
            frame_step: 0.016,
            bound: 500.0,
            fade_distance: 1000.0,
        }
    }
}
