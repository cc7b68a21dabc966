//! Core building blocks shared by every system: logging, randomness, vector math.

#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;
pub mod random;
pub mod vec2;
