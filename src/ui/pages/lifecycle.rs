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
        heading(" DevOps Lifecycle"),
        Line::from(""),
        Line::from("  The lifecycle consists of phases that form a continuous loop:"),
        Line::from(""),
        bullet("Plan: ", "Define requirements and plan the development work"),
        bullet("Code: ", "Write and review code"),
        bullet("Build: ", "Compile and build the application"),
        bullet("Test: ", "Run automated tests to ensure quality"),
        bullet("Release: ", "Prepare the application for deployment"),
        bullet("Deploy: ", "Deploy to production environment"),
        bullet("Operate: ", "Manage and maintain the application"),
        bullet("Monitor: ", "Track performance and gather feedback"),
    ];

    let block = Block::default()
        .title(" Lifecycle ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
