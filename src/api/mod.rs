//! Public JS API
pub mod wasm;
