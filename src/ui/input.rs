//! Keyboard input handling for the TUI.
//!
//! Every key press while a session exists counts as user activity and
//! resets the inactivity timer before the key does anything else.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{
    can_add_password_char, can_add_username_char, App, AppState, LoginFocus, PageTab,
};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // A key press is a recognized activity event; it also dismisses the
    // timeout warning when one is up.
    if app.is_authenticated() {
        app.record_activity();
    }

    match app.state {
        AppState::ShowingNotice => {
            // One-time notice: any key returns to the login form.
            app.dismiss_notice();
            Ok(false)
        }
        AppState::LoggingIn => handle_login_input(app, key).await,
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Portal;
            }
            Ok(false)
        }
        AppState::ConfirmingQuit => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.state = AppState::Quitting;
                    return Ok(true);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.state = AppState::Portal;
                }
                _ => {}
            }
            Ok(false)
        }
        AppState::Portal => handle_portal_input(app, key),
        AppState::Quitting => Ok(true),
    }
}

fn handle_portal_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.logout();
        }
        // Mirrors the original portal's history-back logout
        KeyCode::Backspace => {
            app.back_navigation();
        }
        KeyCode::Enter => {
            // Explicit "stay signed in" from the timeout prompt. Redundant
            // with the activity reset above, but kept as the prompt's named
            // action.
            app.extend_session();
        }
        KeyCode::Char('1') => app.current_tab = PageTab::Overview,
        KeyCode::Char('2') => app.current_tab = PageTab::Principles,
        KeyCode::Char('3') => app.current_tab = PageTab::Tools,
        KeyCode::Char('4') => app.current_tab = PageTab::Lifecycle,
        KeyCode::Left => app.current_tab = app.current_tab.prev(),
        KeyCode::Right => app.current_tab = app.current_tab.next(),
        _ => {}
    }
    Ok(false)
}

async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // Quit if on login screen
            app.state = AppState::Quitting;
            return Ok(true);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Username,
            };
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Username,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Username => {
                app.login_focus = LoginFocus::Password;
            }
            LoginFocus::Password => {
                app.login_focus = LoginFocus::Button;
            }
            LoginFocus::Button => {
                // Single attempt; a failure sets login_error and the user
                // resubmits by pressing Enter again.
                app.attempt_login().await;
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Username => {
                app.login_username.pop();
            }
            LoginFocus::Password => {
                app.login_password.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Username => {
                if can_add_username_char(app.login_username.len(), c) {
                    app.login_username.push(c);
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(app.login_password.len(), c) {
                    app.login_password.push(c);
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }
    Ok(false)
}
