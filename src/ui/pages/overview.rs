use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{heading, plain_bullet};
use crate::ui::styles;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        heading(" What is DevOps?"),
        Line::from(""),
        Line::from(
            "  DevOps is a set of practices that combines software development (Dev) \
             and IT operations (Ops). It aims to shorten the systems development \
             life cycle and provide continuous delivery with high software quality.",
        ),
        Line::from(""),
        heading(" Benefits"),
        Line::from(""),
        plain_bullet("Faster time to market"),
        plain_bullet("Improved collaboration and communication"),
        plain_bullet("Higher quality and more reliable releases"),
        plain_bullet("Reduced deployment failures and faster recovery"),
        plain_bullet("Better resource utilization"),
        plain_bullet("Increased automation and efficiency"),
    ];

    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
