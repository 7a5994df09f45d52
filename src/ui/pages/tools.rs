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
        heading(" Popular DevOps Tools"),
        Line::from(""),
        bullet("Version Control: ", "Git, GitHub, GitLab, Bitbucket"),
        bullet(
            "CI/CD: ",
            "Jenkins, GitLab CI, GitHub Actions, CircleCI, Travis CI",
        ),
        bullet("Containerization: ", "Docker, Kubernetes, Docker Compose"),
        bullet(
            "Configuration Management: ",
            "Ansible, Puppet, Chef, Terraform",
        ),
        bullet("Monitoring: ", "Prometheus, Grafana, ELK Stack, Datadog"),
        bullet("Cloud Platforms: ", "AWS, Azure, Google Cloud Platform"),
    ];

    let block = Block::default()
        .title(" Tools ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
