use crate::domain::theme::CONFETTI_PARTICLE_CSS;
use crate::surface::{SurfaceError, UiSurface};
use crate::systems::confetti::{spawn_particles, Burst, Particle, ParticleStyle};

use super::{PageCommand, PageCore};

/// Spawn a burst and schedule its first frame. Nothing is left in the
/// document if any step fails.
pub(super) fn burst<S: UiSurface>(page: &mut PageCore<S>) -> Result<u32, SurfaceError> {
    let body = page.surface.body().ok_or(SurfaceError::MissingBody)?;
    let particles = spawn_particles(&mut page.rng, &page.settings.confetti);

    let mut live = Vec::with_capacity(particles.len());
    for particle in particles {
        match particle_node(&mut page.surface, &body, &particle) {
            Ok(node) => live.push((particle, node)),
            Err(e) => {
                for (_, node) in &live {
                    page.surface.remove(node);
                }
                return Err(e);
            }
        }
    }

    let id = page.next_burst_id;
    page.next_burst_id = page.next_burst_id.wrapping_add(1);
    page.bursts.insert(id, Burst::with_handles(live));
    if let Err(e) = page.surface.request_frame(PageCommand::AdvanceBurst { burst: id }) {
        drop_burst(page, id);
        return Err(e);
    }
    Ok(id)
}

fn particle_node<S: UiSurface>(
    surface: &mut S,
    body: &S::Node,
    particle: &Particle,
) -> Result<S::Node, SurfaceError> {
    let node = surface.create("div")?;
    surface.set_css_text(&node, CONFETTI_PARTICLE_CSS)?;
    surface.set_style(&node, "background", particle.color())?;
    surface.append(body, &node)?;
    Ok(node)
}

fn style_particle<S: UiSurface>(
    surface: &mut S,
    node: &S::Node,
    style: &ParticleStyle,
) -> Result<(), SurfaceError> {
    surface.set_style(node, "left", &style.left)?;
    surface.set_style(node, "top", &style.top)?;
    surface.set_style(node, "opacity", &style.opacity)
}

fn drop_burst<S: UiSurface>(page: &mut PageCore<S>, id: u32) {
    if let Some(burst) = page.bursts.remove(&id) {
        for (_, node) in burst.iter() {
            page.surface.remove(node);
        }
    }
}

/// One frame: integrate, drop expired nodes, restyle the rest, and reschedule
/// while anything is left. Unknown ids (already finished) are ignored.
/// A styling failure is reported but the burst keeps running; a burst whose
/// next frame cannot be scheduled is removed.
pub(super) fn advance_burst<S: UiSurface>(page: &mut PageCore<S>, id: u32) -> Result<(), SurfaceError> {
    let settings = page.settings.confetti;
    let Some(burst) = page.bursts.get_mut(&id) else {
        return Ok(());
    };

    for node in burst.advance(&settings) {
        page.surface.remove(&node);
    }

    let mut styled = Ok(());
    for (particle, node) in burst.iter() {
        let style = ParticleStyle::for_particle(particle, &settings);
        if let Err(e) = style_particle(&mut page.surface, node, &style) {
            styled = styled.and(Err(e));
        }
    }

    if burst.is_empty() {
        page.bursts.remove(&id);
    } else if let Err(e) = page.surface.request_frame(PageCommand::AdvanceBurst { burst: id }) {
        drop_burst(page, id);
        return Err(e);
    }
    styled
}
