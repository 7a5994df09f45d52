//! Authentication module: session persistence and the inactivity monitor.
//!
//! This module provides:
//! - `Session` / `SessionStore`: the token+profile pair and its on-disk
//!   persistence (saved and cleared together, restored at startup)
//! - `IdleMonitor`: the inactivity state machine that warns and then
//!   force-terminates an idle session

pub mod monitor;
pub mod store;

pub use monitor::{IdleMonitor, MonitorEvent};
pub use store::{Session, SessionStore};
