//! Page theme constants
//!
//! Colors and inline styles applied from Rust. Static page styling lives in the
//! site's stylesheet; only values that change at runtime are kept here.

/// Confetti palette (read-only, shared by every burst)
pub const CONFETTI_COLORS: [&str; 5] = ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57"];

pub const CONFETTI_PARTICLE_CSS: &str = "position: fixed; width: 10px; height: 10px; \
     top: 50%; left: 50%; z-index: 10000; pointer-events: none; border-radius: 50%;";

// === Header ===

pub const HEADER_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const HEADER_SHADOW_SCROLLED: &str = "0 2px 30px rgba(0, 0, 0, 0.15)";
pub const HEADER_BG_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const HEADER_SHADOW_TOP: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";

// === Cards ===

pub const CARD_RAISED_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_RESTING_TRANSFORM: &str = "translateY(0) scale(1)";

pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_SHOWN_OPACITY: &str = "1";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// === Modal ===

pub const MODAL_CLASS: &str = "modal";

pub const MODAL_OVERLAY_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     background: rgba(0, 0, 0, 0.8); display: flex; justify-content: center; align-items: center; \
     z-index: 10000; backdrop-filter: blur(5px);";

pub const MODAL_PANEL_CSS: &str = "background: white; padding: 2rem; border-radius: 20px; \
     max-width: 500px; width: 90%; max-height: 80vh; overflow-y: auto; position: relative; \
     box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);";

pub const MODAL_CLOSE_ICON_CSS: &str = "position: absolute; top: 1rem; right: 1rem; \
     background: #ff6b6b; color: white; border: none; border-radius: 50%; width: 30px; \
     height: 30px; cursor: pointer; font-size: 1.2rem;";

pub const MODAL_TITLE_CSS: &str = "color: #333; margin-bottom: 1rem; text-align: center;";
pub const MODAL_HERO_CSS: &str = "text-align: center; margin-bottom: 1.5rem;";
pub const MODAL_EMOJI_CSS: &str = "font-size: 3rem;";
pub const MODAL_TIME_CSS: &str = "color: #ff6b6b; font-weight: 600; margin-top: 0.5rem;";
pub const MODAL_HEADING_CSS: &str = "color: #333; margin-bottom: 1rem;";
pub const MODAL_INGREDIENTS_CSS: &str = "margin-bottom: 1.5rem; padding-left: 1.5rem;";
pub const MODAL_INGREDIENT_CSS: &str = "margin-bottom: 0.5rem; color: #666;";
pub const MODAL_STEPS_CSS: &str = "padding-left: 1.5rem;";
pub const MODAL_STEP_CSS: &str = "margin-bottom: 0.8rem; color: #666; line-height: 1.5;";
pub const MODAL_FOOTER_CSS: &str = "text-align: center; margin-top: 2rem;";

pub const MODAL_CLOSE_BUTTON_CSS: &str = "background: linear-gradient(45deg, #ff6b6b, #4ecdc4); \
     color: white; border: none; padding: 1rem 2rem; border-radius: 25px; cursor: pointer; \
     font-weight: 600; font-size: 1rem;";
