//! UI surface - the page's only door to the document
//!
//! `PageCore` never touches the DOM directly. Everything it needs (lookups,
//! node construction, styling, listeners, frame scheduling) goes through
//! [`UiSurface`], so the page logic runs the same against the browser
//! ([`web::WebSurface`]) and against the in-memory document used by tests
//! ([`memory::MemorySurface`]).

pub mod memory;
pub mod web;

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::page::PageCommand;
use crate::systems::effects::{RevealOptions, StyleDecl};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("unsupported on this element: {0}")]
    Unsupported(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Which pointer interaction a listener reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Click on the node or any descendant
    Click,
    /// Click whose target is the node itself
    ClickSelf,
    /// Click with the default navigation suppressed
    Navigate,
    PointerEnter,
    PointerLeave,
}

pub trait UiSurface {
    type Node: Clone + PartialEq + std::fmt::Debug + 'static;

    fn body(&self) -> Option<Self::Node>;

    /// First match in document order
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First matching descendant of `root`
    fn find(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// Nearest match among `node` and its ancestors
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn create(&mut self, tag: &str) -> Result<Self::Node, SurfaceError>;
    fn append(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), SurfaceError>;
    /// Detach from the document. Removing a detached node is a no-op.
    fn remove(&mut self, node: &Self::Node);
    fn is_attached(&self, node: &Self::Node) -> bool;

    fn set_class(&mut self, node: &Self::Node, class: &str);
    fn set_text(&mut self, node: &Self::Node, text: &str);
    fn text(&self, node: &Self::Node) -> Option<String>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_css_text(&mut self, node: &Self::Node, css: &str) -> Result<(), SurfaceError>;
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str)
        -> Result<(), SurfaceError>;

    fn scroll_y(&self) -> f64;
    /// Smooth scroll, aligned to the start of the viewport
    fn scroll_into_view(&mut self, node: &Self::Node);

    /// Listener that lives as long as the page
    fn listen(
        &mut self,
        node: &Self::Node,
        trigger: Trigger,
        command: PageCommand<Self::Node>,
    ) -> Result<(), SurfaceError>;
    /// Listener tied to `owner`; it is unregistered by [`UiSurface::release`]
    fn listen_owned(
        &mut self,
        owner: &Self::Node,
        node: &Self::Node,
        trigger: Trigger,
        command: PageCommand<Self::Node>,
    ) -> Result<(), SurfaceError>;
    /// Unregister and drop every listener owned by `owner`
    fn release(&mut self, owner: &Self::Node);
    /// Window scroll
    fn listen_scroll(&mut self, command: PageCommand<Self::Node>) -> Result<(), SurfaceError>;
    /// Emit `PageCommand::Reveal` for each node as it enters the viewport
    fn observe_reveal(
        &mut self,
        nodes: &[Self::Node],
        options: RevealOptions,
    ) -> Result<(), SurfaceError>;
    /// Run `command` on the next animation frame
    fn request_frame(&mut self, command: PageCommand<Self::Node>) -> Result<(), SurfaceError>;

    fn apply_styles(&mut self, node: &Self::Node, decls: &[StyleDecl]) -> Result<(), SurfaceError> {
        for (property, value) in decls {
            self.set_style(node, property, value)?;
        }
        Ok(())
    }
}
