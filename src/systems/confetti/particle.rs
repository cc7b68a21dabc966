use crate::core::random::RandomSource;
use crate::core::vec2::Vec2;
use crate::domain::theme::CONFETTI_COLORS;

use super::ConfettiSettings;

/// One confetti particle. Position is relative to the burst origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per nominal second
    pub vel: Vec2,
    /// Index into `CONFETTI_COLORS`
    pub color_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleFate {
    Alive,
    Expired,
}

impl Particle {
    /// Particle at the origin launched at `angle_deg` with `speed`
    pub fn launch(angle_deg: f64, speed: f64, color_index: usize) -> Self {
        Self {
            pos: Vec2::zero(),
            vel: Vec2::from_polar_degrees(angle_deg, speed),
            color_index: color_index % CONFETTI_COLORS.len(),
        }
    }

    /// Random draw order: color, angle, speed
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, settings: &ConfettiSettings) -> Self {
        let color_index = rng.index(CONFETTI_COLORS.len());
        let angle = rng.range(0.0, 360.0);
        let speed = rng.range(settings.min_speed, settings.max_speed);
        Self::launch(angle, speed, color_index)
    }

    /// Integrate one frame: position first, then gravity on vy.
    #[inline]
    pub fn step(&mut self, dt: f64, gravity: f64) {
        self.pos += self.vel * dt;
        self.vel.y += gravity;
    }

    #[inline]
    pub fn is_out_of_bounds(&self, bound: f64) -> bool {
        self.pos.x.abs() >= bound || self.pos.y.abs() >= bound
    }

    /// Step, then report whether the particle should be removed this frame
    pub fn advance(&mut self, settings: &ConfettiSettings) -> ParticleFate {
        self.step(settings.frame_step, settings.gravity);
        if self.is_out_of_bounds(settings.bound) {
            ParticleFate::Expired
        } else {
            ParticleFate::Alive
        }
    }

    /// Fades linearly with Manhattan distance from the origin
    pub fn opacity(&self, fade_distance: f64) -> f64 {
        1.0 - self.pos.manhattan() / fade_distance
    }

    pub fn color(&self) -> &'static str {
        CONFETTI_COLORS[self.color_index]
    }
}
