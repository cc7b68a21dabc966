use crate::surface::{SurfaceError, Trigger, UiSurface};
use crate::systems::effects::{reveal_hidden_style, REVEAL_SELECTORS};

use super::{PageCommand, PageCore};

pub(super) const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
pub(super) const RECIPE_CARD_SELECTOR: &str = ".recipe-card";
pub(super) const RECIPE_BUTTON_SELECTOR: &str = ".recipe-btn";
pub(super) const CTA_SELECTOR: &str = ".cta-button";

pub(super) fn mount<S: UiSurface>(page: &mut PageCore<S>) -> Result<(), SurfaceError> {
    let surface = &mut page.surface;

    for link in surface.query_all(ANCHOR_SELECTOR) {
        surface.listen(&link, Trigger::Navigate, PageCommand::FollowAnchor { link: link.clone() })?;
    }

    surface.listen_scroll(PageCommand::RestyleHeader)?;

    for card in surface.query_all(RECIPE_CARD_SELECTOR) {
        surface.listen(
            &card,
            Trigger::PointerEnter,
            PageCommand::HoverCard { card: card.clone(), hovered: true },
        )?;
        surface.listen(
            &card,
            Trigger::PointerLeave,
            PageCommand::HoverCard { card: card.clone(), hovered: false },
        )?;
    }

    match surface.query(CTA_SELECTOR) {
        Some(cta) => {
            surface.listen(&cta, Trigger::Click, PageCommand::ScrollToRecipes)?;
            surface.listen(&cta, Trigger::Click, PageCommand::Confetti)?;
        }
        None => console_warn!("no {} on the page; call-to-action disabled", CTA_SELECTOR),
    }

    let buttons = surface.query_all(RECIPE_BUTTON_SELECTOR);
    for button in &buttons {
        surface.listen(button, Trigger::Click, PageCommand::OpenRecipeFor { button: button.clone() })?;
    }

    let mut hidden = Vec::new();
    for selector in REVEAL_SELECTORS {
        for node in surface.query_all(selector) {
            surface.apply_styles(&node, &reveal_hidden_style())?;
            hidden.push(node);
        }
    }
    if !hidden.is_empty() {
        surface.observe_reveal(&hidden, page.settings.reveal)?;
    }

    console_log!(
        "page mounted: {} recipe buttons, {} reveal targets",
        buttons.len(),
        hidden.len()
    );
    Ok(())
}
