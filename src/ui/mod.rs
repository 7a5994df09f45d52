//! Terminal UI module using ratatui.
//!
//! - `render`: main frame rendering, overlays, and layout
//! - `input`: keyboard event handling
//! - `styles`: color palette and text styling
//! - `galaxy`: the decorative starfield background
//! - `pages`: informational content, one module per tab

pub mod galaxy;
pub mod input;
pub mod pages;
pub mod render;
pub mod styles;
