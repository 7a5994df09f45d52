//! HTTP client module for the portal's auth gateway.
//!
//! The gateway is an opaque external collaborator: this module issues a
//! single login request and hands back a token plus user profile, or a
//! message suitable for the login form.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::ApiError;
