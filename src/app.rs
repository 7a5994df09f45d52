//! Application state management for the portal client.
//!
//! The `App` struct owns authentication state: the current session, the
//! inactivity monitor that guards it, the login form, and the decorative
//! background. The monitor is constructed on login and stopped on every
//! exit path (logout, back-navigation, expiry), so a stale expiry can never
//! fire into a newer session.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::api::AuthClient;
use crate::auth::{IdleMonitor, MonitorEvent, Session, SessionStore};
use crate::config::{self, Config};
use crate::ui::galaxy::Galaxy;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for username input.
/// Usernames are typically email-length; 50 chars covers them.
const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// One-time notice shown after a forced inactivity logout
const SESSION_EXPIRED_NOTICE: &str =
    "Your session expired due to inactivity. Please sign in again.";

// ============================================================================
// UI State Types
// ============================================================================

/// Informational content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTab {
    Overview,
    Principles,
    Tools,
    Lifecycle,
}

impl PageTab {
    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            PageTab::Overview => PageTab::Principles,
            PageTab::Principles => PageTab::Tools,
            PageTab::Tools => PageTab::Lifecycle,
            PageTab::Lifecycle => PageTab::Overview,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            PageTab::Overview => PageTab::Lifecycle,
            PageTab::Principles => PageTab::Overview,
            PageTab::Tools => PageTab::Principles,
            PageTab::Lifecycle => PageTab::Tools,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    LoggingIn,
    /// One-time notice overlay after a forced logout, shown over the login view
    ShowingNotice,
    Portal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginFocus {
    Username,
    Password,
    Button,
}

/// Check whether a character can be added to the username field
pub fn can_add_username_char(current_len: usize, c: char) -> bool {
    current_len < MAX_USERNAME_LENGTH && !c.is_control()
}

/// Check whether a character can be added to the password field
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && !c.is_control()
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub store: SessionStore,
    pub api: AuthClient,

    // Authentication state
    pub session: Option<Session>,
    monitor: Option<IdleMonitor>,

    // UI state
    pub state: AppState,
    pub current_tab: PageTab,

    // Login form state
    pub login_username: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    // One-time notice text (session expiry)
    pub notice: Option<String>,

    // Decorative background
    pub galaxy: Galaxy,
    /// Frame counter driving the starfield twinkle
    pub frame_tick: u64,
}

impl App {
    /// Create the application, restoring a persisted session if one is
    /// present and well-formed. A partial or unreadable stored session is
    /// silently treated as "not logged in".
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let store = SessionStore::new(Config::data_dir()?);
        let api = AuthClient::new(config::api_base_url())?;

        Ok(Self::assemble(config, store, api))
    }

    /// Wire the pieces together. Split out so tests can inject a store in a
    /// temp directory and a client pointing at a dead address.
    pub(crate) fn assemble(config: Config, store: SessionStore, api: AuthClient) -> Self {
        let session = store.load();
        if let Some(ref s) = session {
            info!(username = %s.user.username, "Restored persisted session");
        }

        let monitor = session.as_ref().map(|_| IdleMonitor::new(Instant::now()));
        let state = if session.is_some() {
            AppState::Portal
        } else {
            AppState::LoggingIn
        };

        let login_username = config.last_username.clone().unwrap_or_default();
        let login_focus = if login_username.is_empty() {
            LoginFocus::Username
        } else {
            LoginFocus::Password
        };

        Self {
            config,
            store,
            api,
            session,
            monitor,
            state,
            current_tab: PageTab::Overview,
            login_username,
            login_password: String::new(),
            login_focus,
            login_error: None,
            notice: None,
            galaxy: Galaxy::generate(),
            frame_tick: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Username for the header greeting, if signed in
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.username.as_str())
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Attempt login with the credentials from the login form.
    /// Any previous error is cleared before the attempt.
    pub async fn attempt_login(&mut self) {
        let username = self.login_username.trim().to_string();

        if username.is_empty() || self.login_password.is_empty() {
            self.login_error = Some("Username and password required".to_string());
            return;
        }

        self.login_error = None;

        match self.api.authenticate(&username, &self.login_password).await {
            Ok(session) => {
                if let Err(e) = self.store.save(&session) {
                    warn!(error = %e, "Failed to persist session");
                }

                self.config.last_username = Some(username);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                info!(username = %session.user.username, "Login successful");
                self.session = Some(session);
                self.start_monitor();
                self.login_password.clear();
                self.current_tab = PageTab::Overview;
                self.state = AppState::Portal;
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Explicit logout from the header action
    pub fn logout(&mut self) {
        info!("Logging out");
        self.end_session();
        self.show_login();
    }

    /// Backward navigation while authenticated is treated as logout, matching
    /// the original portal's history-back behavior. Kept for parity; nothing
    /// else depends on it.
    pub fn back_navigation(&mut self) {
        if self.is_authenticated() {
            debug!("Back navigation while authenticated, logging out");
            self.end_session();
            self.show_login();
        }
    }

    /// Forced logout from the inactivity monitor
    fn expire_session(&mut self) {
        info!("Session expired after inactivity");
        self.end_session();
        self.notice = Some(SESSION_EXPIRED_NOTICE.to_string());
        self.state = AppState::ShowingNotice;
    }

    /// Tear down the session: stop the monitor, clear both persisted
    /// entries, drop the in-memory pair. Every logout path funnels here.
    fn end_session(&mut self) {
        if let Some(mut monitor) = self.monitor.take() {
            monitor.stop();
        }
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
        self.session = None;
    }

    /// Replace any previous monitor with a fresh one for a new session.
    /// The old monitor is stopped before being dropped; there is never more
    /// than one live monitor.
    fn start_monitor(&mut self) {
        if let Some(mut old) = self.monitor.take() {
            old.stop();
        }
        self.monitor = Some(IdleMonitor::new(Instant::now()));
    }

    fn show_login(&mut self) {
        self.state = AppState::LoggingIn;
        self.login_password.clear();
        self.login_error = None;
        self.login_focus = if self.login_username.is_empty() {
            LoginFocus::Username
        } else {
            LoginFocus::Password
        };
    }

    /// Dismiss the one-time expiry notice and return to the login form
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.show_login();
    }

    // =========================================================================
    // Inactivity monitor
    // =========================================================================

    /// Feed a recognized activity event to the monitor
    pub fn record_activity(&mut self) {
        if let Some(monitor) = &mut self.monitor {
            monitor.record_activity(Instant::now());
        }
    }

    /// The timeout prompt's "stay signed in" action
    pub fn extend_session(&mut self) {
        if let Some(monitor) = &mut self.monitor {
            monitor.extend(Instant::now());
            debug!("Session extended from timeout prompt");
        }
    }

    pub fn warning_active(&self) -> bool {
        self.monitor.as_ref().is_some_and(|m| m.warning_active())
    }

    /// Countdown value for the timeout prompt, when visible
    pub fn warning_seconds_left(&self) -> Option<u32> {
        self.monitor.as_ref().and_then(|m| m.seconds_left())
    }

    /// Advance time-driven state by one event-loop iteration
    pub fn tick(&mut self) {
        self.frame_tick = self.frame_tick.wrapping_add(1);

        let event = self
            .monitor
            .as_mut()
            .and_then(|m| m.poll(Instant::now()));

        match event {
            Some(MonitorEvent::Expired) => self.expire_session(),
            Some(MonitorEvent::WarningStarted { seconds_left }) => {
                debug!(seconds_left, "Inactivity warning started");
            }
            Some(MonitorEvent::CountdownTick { .. }) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn test_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());
        // Points at a dead address; tests here never issue requests.
        let api = AuthClient::new("http://localhost:5001").unwrap();
        let app = App::assemble(Config::default(), store, api);
        (dir, app)
    }

    fn seeded_session() -> Session {
        Session {
            token: "abc".to_string(),
            user: UserProfile::new("akash"),
        }
    }

    #[test]
    fn starts_at_login_without_stored_session() {
        let (_dir, app) = test_app();
        assert_eq!(app.state, AppState::LoggingIn);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn restores_persisted_session_to_portal() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());
        store.save(&seeded_session()).unwrap();

        let api = AuthClient::new("http://localhost:5001").unwrap();
        let app = App::assemble(
            Config::default(),
            SessionStore::new(dir.path().to_path_buf()),
            api,
        );

        assert_eq!(app.state, AppState::Portal);
        assert_eq!(app.username(), Some("akash"));
    }

    #[test]
    fn logout_clears_store_and_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());
        store.save(&seeded_session()).unwrap();

        let api = AuthClient::new("http://localhost:5001").unwrap();
        let mut app = App::assemble(
            Config::default(),
            SessionStore::new(dir.path().to_path_buf()),
            api,
        );
        assert!(app.is_authenticated());

        app.logout();
        assert_eq!(app.state, AppState::LoggingIn);
        assert!(!app.is_authenticated());
        assert!(SessionStore::new(dir.path().to_path_buf()).load().is_none());
    }

    #[test]
    fn back_navigation_logs_out_only_when_authenticated() {
        let (_dir, mut app) = test_app();
        app.back_navigation();
        assert_eq!(app.state, AppState::LoggingIn);

        app.session = Some(seeded_session());
        app.state = AppState::Portal;
        app.back_navigation();
        assert_eq!(app.state, AppState::LoggingIn);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn dismissing_notice_returns_to_login_form() {
        let (_dir, mut app) = test_app();
        app.notice = Some("gone".to_string());
        app.state = AppState::ShowingNotice;

        app.dismiss_notice();
        assert_eq!(app.state, AppState::LoggingIn);
        assert!(app.notice.is_none());
    }

    #[test]
    fn no_warning_without_a_session() {
        let (_dir, app) = test_app();
        assert!(!app.warning_active());
        assert_eq!(app.warning_seconds_left(), None);
    }

    #[test]
    fn input_length_limits() {
        assert!(can_add_username_char(0, 'a'));
        assert!(!can_add_username_char(MAX_USERNAME_LENGTH, 'a'));
        assert!(!can_add_username_char(0, '\n'));
        assert!(can_add_password_char(MAX_PASSWORD_LENGTH - 1, '!'));
        assert!(!can_add_password_char(MAX_PASSWORD_LENGTH, '!'));
    }
}
