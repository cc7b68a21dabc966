use crate::surface::{SurfaceError, UiSurface};
use crate::systems::effects::{card_hover_style, header_style, reveal_shown_style};

use super::PageCore;

const HEADER_SELECTOR: &str = "header";
const RECIPES_SECTION_SELECTOR: &str = "#recipes";

/// Scroll to the element named by the link's `href`; no-op when it is missing.
pub(super) fn follow_anchor<S: UiSurface>(
    page: &mut PageCore<S>,
    link: &S::Node,
) -> Result<(), SurfaceError> {
    let target = page
        .surface
        .attribute(link, "href")
        .and_then(|href| page.surface.query(&href));
    if let Some(target) = target {
        page.surface.scroll_into_view(&target);
    }
    Ok(())
}

pub(super) fn restyle_header<S: UiSurface>(page: &mut PageCore<S>) -> Result<(), SurfaceError> {
    let Some(header) = page.surface.query(HEADER_SELECTOR) else {
        return Ok(());
    };
    let decls = header_style(page.surface.scroll_y(), page.settings.header_scroll_threshold);
    page.surface.apply_styles(&header, &decls)
}

pub(super) fn hover_card<S: UiSurface>(
    page: &mut PageCore<S>,
    card: &S::Node,
    hovered: bool,
) -> Result<(), SurfaceError> {
    page.surface.apply_styles(card, &card_hover_style(hovered))
}

pub(super) fn reveal<S: UiSurface>(page: &mut PageCore<S>, node: &S::Node) -> Result<(), SurfaceError> {
    page.surface.apply_styles(node, &reveal_shown_style())
}

pub(super) fn scroll_to_recipes<S: UiSurface>(page: &mut PageCore<S>) {
    match page.surface.query(RECIPES_SECTION_SELECTOR) {
        Some(section) => page.surface.scroll_into_view(&section),
        None => console_warn!("no {} section to scroll to", RECIPES_SECTION_SELECTOR),
    }
}
