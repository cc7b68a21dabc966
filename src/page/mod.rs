//! Page - orchestration of the site's behavior over a [`UiSurface`]
//!
//! `PageCore` owns the surface, the settings, the active overlays and the
//! running confetti bursts. All behavior is driven by [`PageCommand`]s:
//! listeners registered in `mount` emit them, the host feeds them back
//! through `dispatch`.
//!
//! - commands/ - the command set and dispatch
//! - init/     - listener wiring and settings
//! - modal/    - recipe modal open/dismiss
//! - confetti/ - burst spawn and per-frame advance
//! - effects/  - anchors, header, hover, reveal, CTA scroll

use std::collections::HashMap;

use crate::core::random::XorShift32;
use crate::domain::recipes::RecipeRecord;
use crate::surface::{SurfaceError, UiSurface};
use crate::systems::confetti::Burst;

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "modal/modal.rs"]
mod modal;
#[path = "confetti/confetti.rs"]
mod confetti;
#[path = "effects/effects.rs"]
mod effects;

pub use commands::PageCommand;
pub use settings::{PageSettings, MIN_FRAME_STEP, MIN_GRAVITY};

pub struct PageCore<S: UiSurface> {
    surface: S,
    settings: PageSettings,
    rng: XorShift32,

    // Overlays currently in the document, oldest first
    overlays: Vec<S::Node>,
    bursts: HashMap<u32, Burst<S::Node>>,
    next_burst_id: u32,
}

impl<S: UiSurface> PageCore<S> {
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, PageSettings::default(), XorShift32::from_entropy())
    }

    pub fn with_settings(surface: S, settings: PageSettings, rng: XorShift32) -> Self {
        Self {
            surface,
            settings,
            rng,
            overlays: Vec::new(),
            bursts: HashMap::new(),
            next_burst_id: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Register every page listener on the surface
    pub fn mount(&mut self) -> Result<(), SurfaceError> {
        init::mount(self)
    }

    pub fn dispatch(&mut self, command: PageCommand<S::Node>) -> Result<(), SurfaceError> {
        commands::dispatch(self, command)
    }

    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = PageCommand<S::Node>>,
    ) -> Result<(), SurfaceError> {
        for command in commands {
            self.dispatch(command)?;
        }
        Ok(())
    }

    // === Settings ===

    pub fn set_confetti_gravity(&mut self, gravity: f64) {
        settings::set_confetti_gravity(self, gravity);
    }

    pub fn set_frame_step(&mut self, dt: f64) {
        settings::set_frame_step(self, dt);
    }

    pub fn set_overlay_stacking(&mut self, enabled: bool) {
        settings::set_overlay_stacking(self, enabled);
    }

    pub fn set_header_scroll_threshold(&mut self, threshold: f64) {
        settings::set_header_scroll_threshold(self, threshold);
    }

    // === Recipe modal ===

    /// Look up `title` and show its modal
    pub fn open_recipe(&mut self, title: &str) -> Result<S::Node, SurfaceError> {
        modal::open_recipe(self, title)
    }

    /// Render `record` as an overlay appended to the body. Returns the overlay node.
    pub fn open_recipe_modal(&mut self, record: &RecipeRecord) -> Result<S::Node, SurfaceError> {
        modal::open_recipe_modal(self, record)
    }

    pub fn dismiss_overlay(&mut self, overlay: &S::Node) {
        modal::dismiss_overlay(self, overlay);
    }

    /// Dismiss every open overlay
    pub fn close_overlays(&mut self) {
        modal::close_overlays(self);
    }

    pub fn active_overlays(&self) -> &[S::Node] {
        &self.overlays
    }

    // === Confetti ===

    /// Spawn a burst and schedule its first frame. Returns the burst id.
    pub fn burst(&mut self) -> Result<u32, SurfaceError> {
        confetti::burst(self)
    }

    pub fn advance_burst(&mut self, id: u32) -> Result<(), SurfaceError> {
        confetti::advance_burst(self, id)
    }

    pub fn active_bursts(&self) -> usize {
        self.bursts.len()
    }

    pub fn active_particles(&self) -> usize {
        self.bursts.values().map(|b| b.len()).sum()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
