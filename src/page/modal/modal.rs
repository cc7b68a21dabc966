use crate::domain::recipes::{lookup_recipe, RecipeRecord};
use crate::surface::{SurfaceError, Trigger, UiSurface};
use crate::systems::modal::{recipe_modal, NodeRole, ViewNode};

use super::init::RECIPE_CARD_SELECTOR;
use super::{PageCommand, PageCore};

const CARD_TITLE_SELECTOR: &str = "h3";

/// Resolve the card title from its button: closest card, then its heading.
/// A button outside a card, or a card without a heading, opens nothing.
pub(super) fn open_recipe_for<S: UiSurface>(
    page: &mut PageCore<S>,
    button: &S::Node,
) -> Result<Option<S::Node>, SurfaceError> {
    let title = page
        .surface
        .closest(button, RECIPE_CARD_SELECTOR)
        .and_then(|card| page.surface.find(&card, CARD_TITLE_SELECTOR))
        .and_then(|heading| page.surface.text(&heading));

    match title {
        Some(title) => open_recipe(page, &title).map(Some),
        None => {
            console_warn!("recipe button is not inside a titled {}", RECIPE_CARD_SELECTOR);
            Ok(None)
        }
    }
}

pub(super) fn open_recipe<S: UiSurface>(
    page: &mut PageCore<S>,
    title: &str,
) -> Result<S::Node, SurfaceError> {
    let record = lookup_recipe(title);
    open_recipe_modal(page, &record)
}

pub(super) fn open_recipe_modal<S: UiSurface>(
    page: &mut PageCore<S>,
    record: &RecipeRecord,
) -> Result<S::Node, SurfaceError> {
    if !page.settings.overlay_stacking {
        close_overlays(page);
    }

    let body = page.surface.body().ok_or(SurfaceError::MissingBody)?;
    let view = recipe_modal(record);
    let overlay = page.surface.create(view.tag)?;
    let built = render(&mut page.surface, &view, &overlay, &overlay)
        .and_then(|()| page.surface.append(&body, &overlay));
    if let Err(e) = built {
        page.surface.release(&overlay);
        page.surface.remove(&overlay);
        return Err(e);
    }
    page.overlays.push(overlay.clone());
    Ok(overlay)
}

/// Fill the already created `node` from `view` and build its children.
/// Every listener is owned by `overlay` so dismissing it releases them.
fn render<S: UiSurface>(
    surface: &mut S,
    view: &ViewNode,
    node: &S::Node,
    overlay: &S::Node,
) -> Result<(), SurfaceError> {
    if let Some(class) = view.class {
        surface.set_class(node, class);
    }
    surface.set_css_text(node, view.css)?;
    if let Some(text) = &view.text {
        surface.set_text(node, text);
    }

    match view.role {
        Some(NodeRole::Overlay) => surface.listen_owned(
            overlay,
            node,
            Trigger::ClickSelf,
            PageCommand::DismissOverlay { overlay: node.clone() },
        )?,
        Some(NodeRole::Dismiss) => surface.listen_owned(
            overlay,
            node,
            Trigger::Click,
            PageCommand::DismissOverlay { overlay: overlay.clone() },
        )?,
        None => {}
    }

    for child in &view.children {
        let child_node = surface.create(child.tag)?;
        render(surface, child, &child_node, overlay)?;
        surface.append(node, &child_node)?;
    }
    Ok(())
}

pub(super) fn dismiss_overlay<S: UiSurface>(page: &mut PageCore<S>, overlay: &S::Node) {
    page.surface.release(overlay);
    page.surface.remove(overlay);
    page.overlays.retain(|o| o != overlay);
}

pub(super) fn close_overlays<S: UiSurface>(page: &mut PageCore<S>) {
    for overlay in std::mem::take(&mut page.overlays) {
        page.surface.release(&overlay);
        page.surface.remove(&overlay);
    }
}
