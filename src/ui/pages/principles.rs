use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{bullet, heading};
use crate::ui::styles;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        heading(" Core Principles"),
        Line::from(""),
        bullet(
            "Collaboration: ",
            "Breaking down silos between development and operations teams",
        ),
        bullet(
            "Automation: ",
            "Automating repetitive tasks to increase efficiency and reduce errors",
        ),
        bullet(
            "Continuous Integration: ",
            "Regularly merging code changes into a central repository",
        ),
        bullet(
            "Continuous Delivery: ",
            "Automating the release process to deploy code changes quickly",
        ),
        bullet(
            "Monitoring & Feedback: ",
            "Continuously monitoring applications and infrastructure",
        ),
    ];

    let block = Block::default()
        .title(" Principles ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
