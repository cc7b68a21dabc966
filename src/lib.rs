//! Recipe Showcase - page behavior for the recipe site, compiled to WASM
//!
//! Architecture:
//! - core/     - logging macros, RNG, vector math
//! - domain/   - recipe catalog, theme
//! - systems/  - pure behaviors (confetti, modal layout, page effects)
//! - surface/  - document abstraction (browser + in-memory)
//! - page/     - orchestration over a surface
//! - api/      - public JS API

// Logging macros must be defined before the modules that use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod surface;
pub mod page;
pub mod api;

use wasm_bindgen::prelude::*;

// Paths used by the exported logging macros
#[doc(hidden)]
pub use wasm_bindgen as __wasm_bindgen;
#[doc(hidden)]
pub use web_sys as __web_sys;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🥗 Recipe Showcase WASM initialized!");
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::recipes::{lookup_recipe, RecipeCatalog, RecipeRecord};
pub use page::{PageCommand, PageCore, PageSettings};
pub use surface::{SurfaceError, UiSurface};
pub use systems::confetti::{Burst, ConfettiSettings, Particle};
