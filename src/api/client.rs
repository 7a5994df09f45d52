//! Auth gateway client.
//!
//! One operation: `authenticate`, a single `POST {base}/api/login` with the
//! credentials as JSON. No retries; the caller re-invokes by resubmitting
//! the form. Credential persistence is the caller's business and happens
//! only after success.

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::auth::Session;
use crate::models::UserProfile;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// Long enough for a slow gateway, short enough that a dead one fails fast.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shown when the gateway fails without a usable `message` field
const FALLBACK_LOGIN_ERROR: &str = "Login failed. Please try again.";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the portal auth gateway.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client against the given base URL. An empty base URL is
    /// allowed (relative-path mode); requests will then fail with a network
    /// error unless a proxy rewrites them, matching the deployment intent.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Authenticate against the gateway and return the resulting session.
    ///
    /// On a non-2xx response the gateway's `message` field is surfaced when
    /// present, otherwise a generic fallback. The error string is what the
    /// login form displays.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let url = login_url(&self.base_url);
        debug!(%url, "Sending login request");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Login rejected by gateway");
            return Err(ApiError::Rejected(rejection_message(&body)));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if login.token.is_empty() {
            return Err(ApiError::InvalidResponse("empty token".to_string()));
        }

        Ok(Session {
            token: login.token,
            user: login.user,
        })
    }
}

/// Join the base URL with the login path. With an empty base this yields the
/// bare relative path, preserving the relative-path deployment mode.
fn login_url(base_url: &str) -> String {
    format!("{}/api/login", base_url)
}

/// Extract the user-facing message from a failure body.
/// The gateway sends `{"message": "..."}` on credential failures; anything
/// else falls back to a generic line.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_LOGIN_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_base_and_path() {
        assert_eq!(
            login_url("http://localhost:5001"),
            "http://localhost:5001/api/login"
        );
    }

    #[test]
    fn login_url_empty_base_is_relative() {
        assert_eq!(login_url(""), "/api/login");
    }

    #[test]
    fn rejection_uses_server_message_verbatim() {
        assert_eq!(
            rejection_message(r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn rejection_falls_back_on_missing_message() {
        assert_eq!(rejection_message(r#"{"error":"nope"}"#), FALLBACK_LOGIN_ERROR);
        assert_eq!(rejection_message(r#"{"message":""}"#), FALLBACK_LOGIN_ERROR);
    }

    #[test]
    fn rejection_falls_back_on_non_json_body() {
        assert_eq!(rejection_message("<html>502</html>"), FALLBACK_LOGIN_ERROR);
        assert_eq!(rejection_message(""), FALLBACK_LOGIN_ERROR);
    }

    #[test]
    fn login_response_parses_token_and_user() {
        let raw = r#"{"token":"abc","user":{"username":"akash"}}"#;
        let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token, "abc");
        assert_eq!(parsed.user.username, "akash");
    }
}
