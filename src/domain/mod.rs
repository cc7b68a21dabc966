//! Domain data: the recipe catalog and the page theme.

pub mod recipes;
pub mod theme;
