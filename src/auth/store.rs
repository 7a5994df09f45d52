//! On-disk session persistence.
//!
//! The session is two entries under the app data directory: the opaque
//! `token` and the serialized `user` profile. They are always written and
//! removed as a pair, and a load only succeeds when both are present and
//! well-formed. Anything partial or corrupted is treated as "no session",
//! never surfaced as an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::UserProfile;

/// Token entry file name
const TOKEN_FILE: &str = "token";

/// User profile entry file name
const USER_FILE: &str = "user.json";

/// The authenticated identity: opaque token plus user profile.
/// The two travel together; there is no constructor for half a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

pub struct SessionStore {
    data_dir: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Persist both entries
    pub fn save(&self, session: &Session) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .context("Failed to create session directory")?;
        std::fs::write(self.token_path(), &session.token)
            .context("Failed to write token entry")?;
        let user = serde_json::to_string_pretty(&session.user)?;
        std::fs::write(self.user_path(), user)
            .context("Failed to write user entry")?;
        Ok(())
    }

    /// Load the persisted session, or None.
    ///
    /// A missing token, missing profile, unreadable JSON, or empty username
    /// all fall through to None: partial state must not be treated as
    /// authenticated.
    pub fn load(&self) -> Option<Session> {
        let token = std::fs::read_to_string(self.token_path()).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            debug!("Stored token is empty, ignoring session");
            return None;
        }

        let raw = std::fs::read_to_string(self.user_path()).ok()?;
        let user: UserProfile = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(e) => {
                debug!(error = %e, "Stored user profile is unreadable, ignoring session");
                return None;
            }
        };
        if user.username.is_empty() {
            debug!("Stored user profile has no username, ignoring session");
            return None;
        }

        Some(Session { token, user })
    }

    /// Remove both entries. Idempotent; clearing an empty store is fine.
    pub fn clear(&self) -> Result<()> {
        for path in [self.token_path(), self.user_path()] {
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        Ok(())
    }

    fn token_path(&self) -> PathBuf {
        self.data_dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.data_dir.join(USER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn session() -> Session {
        Session {
            token: "abc123".to_string(),
            user: UserProfile::new("akash"),
        }
    }

    #[test]
    fn save_then_load_returns_identical_pair() {
        let (_dir, store) = store();
        store.save(&session()).unwrap();

        let loaded = store.load().expect("session should load");
        assert_eq!(loaded.token, "abc123");
        assert_eq!(loaded.user.username, "akash");
    }

    #[test]
    fn clear_then_load_returns_none() {
        let (_dir, store) = store();
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing again is harmless.
        store.clear().unwrap();
    }

    #[test]
    fn empty_store_loads_none() {
        let (_dir, store) = store();
        assert!(store.load().is_none());
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("token"), "abc123").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn user_without_token_is_not_a_session() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("user.json"), r#"{"username":"akash"}"#).unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn malformed_user_entry_is_not_a_session() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("token"), "abc123").unwrap();
        std::fs::write(dir.path().join("user.json"), "{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn blank_token_is_not_a_session() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("token"), "  \n").unwrap();
        std::fs::write(dir.path().join("user.json"), r#"{"username":"akash"}"#).unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_previous_session() {
        let (_dir, store) = store();
        store.save(&session()).unwrap();
        store
            .save(&Session {
                token: "newtoken".to_string(),
                user: UserProfile::new("priya"),
            })
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "newtoken");
        assert_eq!(loaded.user.username, "priya");
    }
}
