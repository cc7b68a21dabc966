//! Recipe detail modal
//!
//! The modal is described as a small view tree so the layout can be checked
//! without a document. The page renders the tree onto its surface and wires the
//! nodes tagged with a [`NodeRole`].

mod layout;

pub use layout::{recipe_modal, NodeRole, ViewNode};
