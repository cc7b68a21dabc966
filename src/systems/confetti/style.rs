use super::particle::Particle;
use super::ConfettiSettings;

/// Inline style values for a particle node on the current frame
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left: String,
    pub top: String,
    pub opacity: String,
}

impl ParticleStyle {
    /// Offsets are applied from the viewport centre, where the node is anchored.
    pub fn for_particle(particle: &Particle, settings: &ConfettiSettings) -> Self {
        Self {
            left: format!("calc(50% + {}px)", particle.pos.x),
            top: format!("calc(50% + {}px)", particle.pos.y),
            opacity: format!("{}", particle.opacity(settings.fade_distance)),
        }
    }
}
