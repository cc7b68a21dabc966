//! `#[wasm_bindgen]` exports
//!
//! The mounted page lives in a thread-local; browser listeners reach it
//! through `dispatch`. A command that arrives while the page is already
//! borrowed (re-entrant event during a dispatch) is dropped with a warning.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::domain::recipes::{catalog, lookup_recipe};
use crate::page::{PageCommand, PageCore};
use crate::surface::web::WebSurface;
use crate::surface::SurfaceError;

thread_local! {
    static PAGE: RefCell<Option<PageCore<WebSurface>>> = RefCell::new(None);
}

fn dispatch(command: PageCommand<Element>) {
    PAGE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(page) = slot.as_mut() {
                if let Err(e) = page.dispatch(command) {
                    console_warn!("page command failed: {}", e);
                }
            }
        }
        Err(_) => console_warn!("dropped re-entrant page command {:?}", command),
    })
}

fn with_page<T>(
    f: impl FnOnce(&mut PageCore<WebSurface>) -> Result<T, SurfaceError>,
) -> Result<T, JsValue> {
    PAGE.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("page is busy"))?;
        let page = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("page not mounted; call mount() first"))?;
        f(page).map_err(JsValue::from)
    })
}

/// Wire the page's listeners. Call once after the document has loaded.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    if PAGE.with(|cell| cell.borrow().is_some()) {
        console_warn!("page already mounted");
        return Ok(());
    }
    let surface = WebSurface::new(Rc::new(dispatch))?;
    let mut page = PageCore::new(surface);
    page.mount()?;
    PAGE.with(|cell| cell.replace(Some(page)));
    Ok(())
}

/// Open the detail modal for `title` (placeholder for unknown titles)
#[wasm_bindgen]
pub fn open_recipe(title: &str) -> Result<(), JsValue> {
    with_page(|page| page.open_recipe(title).map(|_| ()))
}

#[wasm_bindgen]
pub fn close_overlay() -> Result<(), JsValue> {
    with_page(|page| {
        page.close_overlays();
        Ok(())
    })
}

/// Fire a confetti burst. Returns the burst id.
#[wasm_bindgen]
pub fn burst_confetti() -> Result<u32, JsValue> {
    with_page(|page| page.burst())
}

/// Live particles across all bursts (0 before `mount`)
#[wasm_bindgen]
pub fn active_particles() -> usize {
    with_page(|page| Ok(page.active_particles())).unwrap_or(0)
}

#[wasm_bindgen]
pub fn lookup_recipe_json(title: &str) -> String {
    lookup_recipe(title).to_json()
}

#[wasm_bindgen]
pub fn recipe_manifest_json() -> String {
    catalog().manifest_json()
}

#[wasm_bindgen]
pub fn set_confetti_gravity(gravity: f64) -> Result<(), JsValue> {
    with_page(|page| {
        page.set_confetti_gravity(gravity);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn set_frame_step(dt: f64) -> Result<(), JsValue> {
    with_page(|page| {
        page.set_frame_step(dt);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn set_overlay_stacking(enabled: bool) -> Result<(), JsValue> {
    with_page(|page| {
        page.set_overlay_stacking(enabled);
        Ok(())
    })
}
