//! Systems: pure page behaviors with no DOM access.
//!
//! - confetti/  - particle burst spawn + fixed-step integration
//! - modal/     - recipe modal layout
//! - effects    - header, hover and reveal styles

pub mod confetti;
pub mod effects;
pub mod modal;
