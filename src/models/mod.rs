//! Data types shared across the portal client.

pub mod user;

pub use user::UserProfile;
