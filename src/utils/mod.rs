//! Utility functions for text formatting.

pub mod format;

pub use format::{seconds_label, truncate};
