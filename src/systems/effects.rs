//! Ambient page effects as pure style decisions
//!
//! Each function maps an observation (scroll offset, hover, visibility) to the
//! inline style declarations the page applies. No DOM access happens here.

use crate::domain::theme::{
    CARD_RAISED_TRANSFORM, CARD_RESTING_TRANSFORM, HEADER_BG_SCROLLED, HEADER_BG_TOP,
    HEADER_SHADOW_SCROLLED, HEADER_SHADOW_TOP, REVEAL_HIDDEN_OPACITY, REVEAL_HIDDEN_TRANSFORM,
    REVEAL_SHOWN_OPACITY, REVEAL_SHOWN_TRANSFORM, REVEAL_TRANSITION,
};

/// (css property, value)
pub type StyleDecl = (&'static str, &'static str);

/// Elements that fade in when scrolled into view
pub const REVEAL_SELECTORS: [&str; 2] = [".recipe-card", ".tip-card"];

/// Intersection parameters for the reveal effect
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Header look for the current scroll offset. Switches strictly above `threshold`.
pub fn header_style(scroll_y: f64, threshold: f64) -> [StyleDecl; 2] {
    if scroll_y > threshold {
        [("background", HEADER_BG_SCROLLED), ("box-shadow", HEADER_SHADOW_SCROLLED)]
    } else {
        [("background", HEADER_BG_TOP), ("box-shadow", HEADER_SHADOW_TOP)]
    }
}

pub fn card_hover_style(hovered: bool) -> [StyleDecl; 1] {
    let transform = if hovered {
        CARD_RAISED_TRANSFORM
    } else {
        CARD_RESTING_TRANSFORM
    };
    [("transform", transform)]
}

/// Initial state applied before observation starts
pub fn reveal_hidden_style() -> [StyleDecl; 3] {
    [
        ("opacity", REVEAL_HIDDEN_OPACITY),
        ("transform", REVEAL_HIDDEN_TRANSFORM),
        ("transition", REVEAL_TRANSITION),
    ]
}

pub fn reveal_shown_style() -> [StyleDecl; 2] {
    [("opacity", REVEAL_SHOWN_OPACITY), ("transform", REVEAL_SHOWN_TRANSFORM)]
}
