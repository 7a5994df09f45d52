//! Informational portal pages.
//!
//! Static educational content, one module per tab. Pages render inside a
//! bordered block; the starfield shows through the surrounding margins.

pub mod lifecycle;
pub mod overview;
pub mod principles;
pub mod tools;

use ratatui::text::{Line, Span};

use super::styles;

/// Section heading line
fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::highlight_style()))
}

/// Bullet item with a bold lead-in term
fn bullet(term: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", styles::muted_style()),
        Span::styled(term, styles::title_style()),
        Span::styled(text, styles::body_style()),
    ])
}

/// Plain bullet item
fn plain_bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", styles::muted_style()),
        Span::styled(text, styles::body_style()),
    ])
}
