use crate::core::random::RandomSource;

use super::particle::{Particle, ParticleFate};
use super::ConfettiSettings;

/// Spawn the particles of one burst
pub fn spawn_particles<R: RandomSource + ?Sized>(
    rng: &mut R,
    settings: &ConfettiSettings,
) -> Vec<Particle> {
    (0..settings.count)
        .map(|_| Particle::spawn(rng, settings))
        .collect()
}

/// Live particles of one burst, each paired with a handle `T` (its visual node,
/// or `()` when simulating headless).
pub struct Burst<T = ()> {
    live: Vec<(Particle, T)>,
    frames: u32,
}

impl Burst<()> {
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, settings: &ConfettiSettings) -> Self {
        Self::with_handles(spawn_particles(rng, settings).into_iter().map(|p| (p, ())))
    }
}

impl<T> Burst<T> {
    pub fn with_handles(particles: impl IntoIterator<Item = (Particle, T)>) -> Self {
        Self {
            live: particles.into_iter().collect(),
            frames: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Frames advanced so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Particle, T)> {
        self.live.iter()
    }

    /// Advance every live particle one frame. Returns the handles of particles
    /// removed this frame, in spawn order.
    pub fn advance(&mut self, settings: &ConfettiSettings) -> Vec<T> {
        self.frames += 1;
        let mut expired = Vec::new();
        let previous = std::mem::take(&mut self.live);
        self.live.reserve(previous.len());
        for (mut particle, handle) in previous {
            match particle.advance(settings) {
                ParticleFate::Alive => self.live.push((particle, handle)),
                ParticleFate::Expired => expired.push(handle),
            }
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::XorShift32;

    #[test]
    fn spawns_exactly_count() {
        let mut rng = XorShift32::new(1);
        let settings = ConfettiSettings::default();
        assert_eq!(spawn_particles(&mut rng, &settings).len(), 50);

        let burst = Burst::spawn(&mut rng, &settings);
        assert_eq!(burst.len(), 50);
        assert_eq!(burst.frames(), 0);
    }

    #[test]
    fn spawned_particles_start_at_origin_within_speed_range() {
        let mut rng = XorShift32::new(42);
        let settings = ConfettiSettings::default();
        for p in spawn_particles(&mut rng, &settings) {
            assert_eq!(p.pos.x, 0.0);
            assert_eq!(p.pos.y, 0.0);
            let speed = p.vel.length();
            assert!(speed >= 100.0 - 1e-9 && speed < 400.0 + 1e-9, "{}", speed);
            assert!(p.color_index < 5);
        }
    }

    #[test]
    fn every_burst_terminates() {
        let settings = ConfettiSettings::default();
        for seed in 1..40u32 {
            let mut rng = XorShift32::new(seed);
            let mut burst = Burst::spawn(&mut rng, &settings);
            let mut removed = 0;
            while !burst.is_empty() {
                removed += burst.advance(&settings).len();
                assert!(burst.frames() <= 1000, "seed {} ran too long", seed);
            }
            assert_eq!(removed, 50);
        }
    }

    #[test]
    fn slowest_vertical_launch_still_terminates() {
        // Straight up just below the speed that would cross the top bound
        let settings = ConfettiSettings::default();
        let mut burst = Burst::with_handles([(Particle::launch(270.0, 176.0, 0), 7u8)]);
        let mut expired = Vec::new();
        while expired.is_empty() {
            expired = burst.advance(&settings);
        }
        assert_eq!(expired, vec![7]);
        assert!(burst.frames() > 800 && burst.frames() <= 1000, "{}", burst.frames());
    }

    #[test]
    fn handles_follow_their_particles() {
        let settings = ConfettiSettings {
            frame_step: 1.0,
            gravity: 0.0,
            ..ConfettiSettings::default()
        };
        // Fast particle leaves on frame 1, slow one stays
        let mut burst = Burst::with_handles([
            (Particle::launch(0.0, 600.0, 0), "fast"),
            (Particle::launch(180.0, 10.0, 1), "slow"),
        ]);
        assert_eq!(burst.advance(&settings), vec!["fast"]);
        assert_eq!(burst.len(), 1);
        assert_eq!(burst.iter().next().map(|(_, h)| *h), Some("slow"));
    }
}
