use crate::domain::recipes::RecipeRecord;
use crate::domain::theme::{
    MODAL_CLASS, MODAL_CLOSE_BUTTON_CSS, MODAL_CLOSE_ICON_CSS, MODAL_EMOJI_CSS,
    MODAL_FOOTER_CSS, MODAL_HEADING_CSS, MODAL_HERO_CSS, MODAL_INGREDIENTS_CSS,
    MODAL_INGREDIENT_CSS, MODAL_OVERLAY_CSS, MODAL_PANEL_CSS, MODAL_STEPS_CSS, MODAL_STEP_CSS,
    MODAL_TIME_CSS, MODAL_TITLE_CSS,
};

/// Behavior attached to a node once rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// Full-viewport backdrop; a click landing on it (not a child) dismisses
    Overlay,
    /// Any click dismisses
    Dismiss,
}

/// Element to create. Text is always plain text content, never markup.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub css: &'static str,
    pub text: Option<String>,
    pub role: Option<NodeRole>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: &'static str, css: &'static str) -> Self {
        Self {
            tag,
            class: None,
            css,
            text: None,
            role: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first, self included
    pub fn walk(&self) -> Vec<&ViewNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    pub fn find_tag(&self, tag: &str) -> Option<&ViewNode> {
        self.walk().into_iter().find(|n| n.tag == tag)
    }
}

fn list<'a>(
    tag: &'static str,
    css: &'static str,
    item_css: &'static str,
    items: impl IntoIterator<Item = &'a String>,
) -> ViewNode {
    ViewNode::new(tag, css)
        .with_children(items.into_iter().map(|item| ViewNode::new("li", item_css).with_text(item.as_str())))
}

/// Overlay -> panel -> (close icon, title, hero, ingredients, instructions, footer)
pub fn recipe_modal(record: &RecipeRecord) -> ViewNode {
    let panel = ViewNode::new("div", MODAL_PANEL_CSS).with_children([
        ViewNode::new("button", MODAL_CLOSE_ICON_CSS)
            .with_text("×")
            .with_role(NodeRole::Dismiss),
        ViewNode::new("h2", MODAL_TITLE_CSS).with_text(record.title.as_str()),
        ViewNode::new("div", MODAL_HERO_CSS).with_children([
            ViewNode::new("span", MODAL_EMOJI_CSS).with_text(record.emoji.as_str()),
            ViewNode::new("p", MODAL_TIME_CSS).with_text(record.time.as_str()),
        ]),
        ViewNode::new("h3", MODAL_HEADING_CSS).with_text("Ingredients:"),
        list("ul", MODAL_INGREDIENTS_CSS, MODAL_INGREDIENT_CSS, &record.ingredients),
        ViewNode::new("h3", MODAL_HEADING_CSS).with_text("Instructions:"),
        list("ol", MODAL_STEPS_CSS, MODAL_STEP_CSS, &record.instructions),
        ViewNode::new("div", MODAL_FOOTER_CSS).with_children([ViewNode::new(
            "button",
            MODAL_CLOSE_BUTTON_CSS,
        )
        .with_text("Close")
        .with_role(NodeRole::Dismiss)]),
    ]);

    ViewNode::new("div", MODAL_OVERLAY_CSS)
        .with_class(MODAL_CLASS)
        .with_role(NodeRole::Overlay)
        .with_children([panel])
}
