use crate::surface::UiSurface;
use crate::systems::confetti::ConfettiSettings;
use crate::systems::effects::RevealOptions;

use super::PageCore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSettings {
    pub confetti: ConfettiSettings,
    /// Header switches to its scrolled look strictly above this offset (px)
    pub header_scroll_threshold: f64,
    /// When false, opening a modal first dismisses any open one
    pub overlay_stacking: bool,
    pub reveal: RevealOptions,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            confetti: ConfettiSettings::default(),
            header_scroll_threshold: 100.0,
            overlay_stacking: false,
            reveal: RevealOptions::default(),
        }
    }
}

/// Smallest accepted gravity (px/frame²). Below it a burst can stay on screen
/// for minutes.
pub const MIN_GRAVITY: f64 = 0.01;
/// Smallest accepted frame step (s)
pub const MIN_FRAME_STEP: f64 = 0.004;

pub(super) fn set_confetti_gravity<S: UiSurface>(page: &mut PageCore<S>, gravity: f64) {
    if !(gravity.is_finite() && gravity >= MIN_GRAVITY) {
        console_warn!("ignoring confetti gravity {} (minimum {})", gravity, MIN_GRAVITY);
        return;
    }
    page.settings.confetti.gravity = gravity;
}

pub(super) fn set_frame_step<S: UiSurface>(page: &mut PageCore<S>, dt: f64) {
    if !(dt.is_finite() && dt >= MIN_FRAME_STEP) {
        console_warn!("ignoring frame step {} (minimum {})", dt, MIN_FRAME_STEP);
        return;
    }
    page.settings.confetti.frame_step = dt;
}

pub(super) fn set_overlay_stacking<S: UiSurface>(page: &mut PageCore<S>, enabled: bool) {
    page.settings.overlay_stacking = enabled;
}

pub(super) fn set_header_scroll_threshold<S: UiSurface>(page: &mut PageCore<S>, threshold: f64) {
    page.settings.header_scroll_threshold = threshold;
}
