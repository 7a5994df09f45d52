use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The gateway rejected the login. The message is shown to the user
    /// verbatim, so it is either the gateway's own `message` field or the
    /// generic fallback.
    #[error("{0}")]
    Rejected(String),

    #[error("Unable to connect to server. Check your connection.")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}
