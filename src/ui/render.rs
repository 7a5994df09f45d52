use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, LoginFocus, PageTab};
use crate::utils::{seconds_label, truncate};

use super::galaxy;
use super::pages::{lifecycle, overview, principles, tools};
use super::styles;

/// Widest the content column gets; the starfield stays visible either side
const CONTENT_MAX_WIDTH: u16 = 84;

pub fn render(frame: &mut Frame, app: &App) {
    // Starfield first; everything else draws over it.
    galaxy::render(&app.galaxy, app.frame_tick, frame, frame.area());

    match app.state {
        AppState::LoggingIn | AppState::ShowingNotice => {
            render_login_panel(frame, app);
            if app.state == AppState::ShowingNotice {
                render_notice_overlay(frame, app);
            }
        }
        AppState::Portal | AppState::ShowingHelp | AppState::ConfirmingQuit | AppState::Quitting => {
            render_portal(frame, app);

            // The timeout prompt is a passive view of the monitor's warning
            // state; it appears under any explicit overlay.
            if app.warning_active() {
                render_timeout_prompt(frame, app);
            }
            if app.state == AppState::ShowingHelp {
                render_help_overlay(frame);
            }
            if app.state == AppState::ConfirmingQuit {
                render_quit_overlay(frame);
            }
        }
    }
}

// ============================================================================
// Portal chrome
// ============================================================================

fn render_portal(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_page(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  DevOps Portal";
    let greeting = match app.username() {
        Some(name) => format!("Welcome, {}!  ", name),
        None => String::new(),
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(title.len())
                .saturating_sub(greeting.len()),
        )),
        Span::styled(greeting, styles::highlight_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = [
        ("[1] Overview", app.current_tab == PageTab::Overview),
        ("[2] Principles", app.current_tab == PageTab::Principles),
        ("[3] Tools", app.current_tab == PageTab::Tools),
        ("[4] Lifecycle", app.current_tab == PageTab::Lifecycle),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(*label, styles::tab_style(*selected)));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let content = centered_column(CONTENT_MAX_WIDTH, area);
    match app.current_tab {
        PageTab::Overview => overview::render(frame, content),
        PageTab::Principles => principles::render(frame, content),
        PageTab::Tools => tools::render(frame, content),
        PageTab::Lifecycle => lifecycle::render(frame, content),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = match app.username() {
        Some(name) => format!(" Signed in as {} ", name),
        None => " Not signed in ".to_string(),
    };
    let right_text = " [l]ogout | [?] help | [q]uit ";

    let padding = (area.width as usize)
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

// ============================================================================
// Login view
// ============================================================================

fn render_login_panel(frame: &mut Frame, app: &App) {
    let height = if app.login_error.is_some() { 15 } else { 13 };
    let area = centered_rect_fixed(48, height, frame.area());

    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "       Welcome to DevOps World",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "        Powering modern delivery",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    // Username field
    let username_focused = app.login_focus == LoginFocus::Username;
    let username_style = if username_focused {
        styles::selected_style()
    } else {
        styles::body_style()
    };
    let username_display = format!("{:<18}", app.login_username);
    let cursor = if username_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("     "),
        Span::styled("Username: [", styles::muted_style()),
        Span::styled(format!("{}{}", username_display, cursor), username_style),
        Span::styled("]", styles::muted_style()),
    ]));

    // Password field, masked
    let password_focused = app.login_focus == LoginFocus::Password;
    let password_style = if password_focused {
        styles::selected_style()
    } else {
        styles::body_style()
    };
    let password_masked: String = "*".repeat(app.login_password.len().min(18));
    let password_display = format!("{:<18}", password_masked);
    let cursor = if password_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("     "),
        Span::styled("Password: [", styles::muted_style()),
        Span::styled(format!("{}{}", password_display, cursor), password_style),
        Span::styled("]", styles::muted_style()),
    ]));

    // Login button
    let button_focused = app.login_focus == LoginFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::body_style()
    };
    lines.push(Line::from(""));
    let button_label = if button_focused { " ▶ Login ◀ " } else { "   Login   " };
    lines.push(Line::from(vec![
        Span::raw("             ["),
        Span::styled(button_label, button_style),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.login_error {
        // Gateway messages are shown verbatim but must fit the panel.
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate(error, 44)),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "         v1.0.0 - Author: Akash",
        styles::muted_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Overlays
// ============================================================================

/// Session timeout prompt. Purely presentational: visibility and the count
/// both come from the monitor, and the only action is "stay signed in".
fn render_timeout_prompt(frame: &mut Frame, app: &App) {
    let Some(seconds) = app.warning_seconds_left() else {
        return;
    };

    let area = centered_rect_fixed(48, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "               Session Expiring",
            styles::warning_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("   Your session will expire in {}.", seconds_label(seconds)),
            styles::body_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("         Press ", styles::muted_style()),
            Span::styled("[Enter]", styles::help_key_style()),
            Span::styled(" to stay signed in", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles::WARNING));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notice_overlay(frame: &mut Frame, app: &App) {
    let Some(ref notice) = app.notice else {
        return;
    };

    let area = centered_rect_fixed(58, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "                    Signed out",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", notice), styles::body_style())),
        Line::from(""),
        Line::from(Span::styled(
            "              Press any key to continue",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(48, 14, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled(
            "                 DevOps Portal",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("                 version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        help_line("  1-4       ", "Switch pages"),
        help_line("  ←/→       ", "Previous/next page"),
        help_line("  Enter     ", "Stay signed in (during warning)"),
        help_line("  Backspace ", "Back (signs you out)"),
        help_line("  l         ", "Logout"),
        help_line("  q         ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Geometry helpers
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Centre a column of at most `max_width` cells within `area`
fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
