use crate::surface::{SurfaceError, UiSurface};

use super::{confetti, effects, modal, PageCore};

/// Everything the page reacts to. Generic over the surface's node handle so
/// the same commands flow from browser listeners and from tests.
#[derive(Clone, Debug, PartialEq)]
pub enum PageCommand<N> {
    /// In-page anchor clicked; scroll to its `href` target if it exists
    FollowAnchor { link: N },
    /// Window scrolled
    RestyleHeader,
    HoverCard { card: N, hovered: bool },
    /// Node entered the viewport
    Reveal { node: N },
    /// CTA: scroll to the recipes section
    ScrollToRecipes,
    /// CTA: fire a confetti burst
    Confetti,
    /// Recipe button clicked; open the modal for its card
    OpenRecipeFor { button: N },
    DismissOverlay { overlay: N },
    /// Animation frame for a running burst
    AdvanceBurst { burst: u32 },
}

pub(super) fn dispatch<S: UiSurface>(
    page: &mut PageCore<S>,
    command: PageCommand<S::Node>,
) -> Result<(), SurfaceError> {
    match command {
        PageCommand::FollowAnchor { link } => effects::follow_anchor(page, &link),
        PageCommand::RestyleHeader => effects::restyle_header(page),
        PageCommand::HoverCard { card, hovered } => effects::hover_card(page, &card, hovered),
        PageCommand::Reveal { node } => effects::reveal(page, &node),
        PageCommand::ScrollToRecipes => {
            effects::scroll_to_recipes(page);
            Ok(())
        }
        PageCommand::Confetti => confetti::burst(page).map(|_| ()),
        PageCommand::OpenRecipeFor { button } => modal::open_recipe_for(page, &button).map(|_| ()),
        PageCommand::DismissOverlay { overlay } => {
            modal::dismiss_overlay(page, &overlay);
            Ok(())
        }
        PageCommand::AdvanceBurst { burst } => confetti::advance_burst(page, burst),
    }
}
