//! Inactivity session monitor.
//!
//! Enforces a fixed idle budget after which the session is force-terminated,
//! with a trailing warning window during which the user can extend. The
//! monitor is an owned value with no timer handles of its own: the event
//! loop drives it by calling [`IdleMonitor::poll`] with the current time,
//! so there is nothing that can keep firing after teardown. Dropping or
//! stopping the monitor is teardown.
//!
//! State machine:
//!
//! ```text
//! Active --(elapsed >= budget - warning_window)--> Warning
//! Warning --(activity or extend)-----------------> Active
//! Warning --(countdown reaches 0)----------------> Expired (terminal)
//! ```

use std::time::{Duration, Instant};

/// Total inactivity tolerated before forced logout
const IDLE_BUDGET: Duration = Duration::from_secs(5 * 60);

/// Trailing portion of the idle budget during which the countdown shows
const WARNING_WINDOW: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Warning,
    Expired,
}

/// A state transition surfaced by [`IdleMonitor::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Entered the warning window; the prompt should appear with this count
    WarningStarted { seconds_left: u32 },
    /// The displayed countdown value changed
    CountdownTick { seconds_left: u32 },
    /// The idle budget is spent; the session must be terminated
    Expired,
}

/// Tracks user inactivity for one session.
///
/// Owned by the application shell: constructed on login, stopped and dropped
/// on logout. At most one monitor exists at a time.
pub struct IdleMonitor {
    budget: Duration,
    warning_window: Duration,
    last_activity: Instant,
    phase: Phase,
    /// Countdown value last surfaced to the prompt, None outside the warning
    displayed_seconds: Option<u32>,
    stopped: bool,
}

impl IdleMonitor {
    pub fn new(now: Instant) -> Self {
        Self::with_timing(IDLE_BUDGET, WARNING_WINDOW, now)
    }

    /// Construct with explicit timing. Used by tests to avoid five-minute
    /// waits; production code uses [`IdleMonitor::new`].
    pub fn with_timing(budget: Duration, warning_window: Duration, now: Instant) -> Self {
        debug_assert!(warning_window < budget);
        Self {
            budget,
            warning_window,
            last_activity: now,
            phase: Phase::Active,
            displayed_seconds: None,
            stopped: false,
        }
    }

    /// Record a recognized user activity (key press, pointer move, pointer
    /// down). Resets the elapsed measurement; if the warning prompt is up,
    /// the countdown and the warning state are cleared in this same call, so
    /// no stale countdown value is observable afterwards.
    pub fn record_activity(&mut self, now: Instant) {
        if self.stopped || self.phase == Phase::Expired {
            return;
        }
        self.last_activity = now;
        self.phase = Phase::Active;
        self.displayed_seconds = None;
    }

    /// The prompt's explicit "stay signed in" action
    pub fn extend(&mut self, now: Instant) {
        self.record_activity(now);
    }

    /// Stop the monitor permanently. A stopped monitor emits nothing and
    /// ignores activity; call on logout and before replacing the monitor.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.displayed_seconds = None;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True while the warning prompt should be visible
    pub fn warning_active(&self) -> bool {
        !self.stopped && self.phase == Phase::Warning
    }

    /// Seconds shown by the prompt, if it is visible
    pub fn seconds_left(&self) -> Option<u32> {
        if self.warning_active() {
            self.displayed_seconds
        } else {
            None
        }
    }

    /// Advance the state machine to `now` and return at most one transition.
    /// Call at least once per second; the event loop's draw tick is plenty.
    /// After `Expired` has been returned once the monitor stays silent.
    pub fn poll(&mut self, now: Instant) -> Option<MonitorEvent> {
        if self.stopped || self.phase == Phase::Expired {
            return None;
        }

        let elapsed = now.duration_since(self.last_activity);
        if elapsed >= self.budget {
            self.phase = Phase::Expired;
            self.displayed_seconds = None;
            return Some(MonitorEvent::Expired);
        }

        let warning_threshold = self.budget - self.warning_window;
        if elapsed < warning_threshold {
            return None;
        }

        let seconds = Self::seconds_remaining(self.budget - elapsed);
        match self.phase {
            Phase::Active => {
                self.phase = Phase::Warning;
                self.displayed_seconds = Some(seconds);
                Some(MonitorEvent::WarningStarted {
                    seconds_left: seconds,
                })
            }
            Phase::Warning => {
                if self.displayed_seconds != Some(seconds) {
                    self.displayed_seconds = Some(seconds);
                    Some(MonitorEvent::CountdownTick {
                        seconds_left: seconds,
                    })
                } else {
                    None
                }
            }
            // Handled by the early return above
            Phase::Expired => None,
        }
    }

    /// Round the remaining budget up to whole seconds. The countdown starts
    /// at the full window, shows 1 through the final second, and never shows
    /// 0 or a negative value while the session is alive.
    fn seconds_remaining(remaining: Duration) -> u32 {
        let whole = remaining.as_secs() as u32;
        if remaining.subsec_nanos() > 0 {
            whole + 1
        } else {
            whole.max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(10);
    const WARNING: Duration = Duration::from_secs(3);

    fn monitor(start: Instant) -> IdleMonitor {
        IdleMonitor::with_timing(BUDGET, WARNING, start)
    }

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn quiet_before_warning_threshold() {
        let start = Instant::now();
        let mut m = monitor(start);

        assert_eq!(m.poll(at(start, 0)), None);
        assert_eq!(m.poll(at(start, 6_999)), None);
        assert!(!m.warning_active());
        assert_eq!(m.seconds_left(), None);
    }

    #[test]
    fn warning_starts_with_full_window() {
        let start = Instant::now();
        let mut m = monitor(start);

        // Threshold is budget - warning = 7s.
        assert_eq!(
            m.poll(at(start, 7_000)),
            Some(MonitorEvent::WarningStarted { seconds_left: 3 })
        );
        assert!(m.warning_active());
        assert_eq!(m.seconds_left(), Some(3));
    }

    #[test]
    fn countdown_decrements_by_exactly_one() {
        let start = Instant::now();
        let mut m = monitor(start);

        assert_eq!(
            m.poll(at(start, 7_000)),
            Some(MonitorEvent::WarningStarted { seconds_left: 3 })
        );
        // Sub-second polls do not produce duplicate ticks.
        assert_eq!(m.poll(at(start, 7_400)), None);
        assert_eq!(
            m.poll(at(start, 8_100)),
            Some(MonitorEvent::CountdownTick { seconds_left: 2 })
        );
        assert_eq!(m.poll(at(start, 8_900)), None);
        assert_eq!(
            m.poll(at(start, 9_100)),
            Some(MonitorEvent::CountdownTick { seconds_left: 1 })
        );
        // Never reaches 0: the next transition is expiry.
        assert_eq!(m.poll(at(start, 10_000)), Some(MonitorEvent::Expired));
    }

    #[test]
    fn expiry_fires_once_then_silence() {
        let start = Instant::now();
        let mut m = monitor(start);

        assert_eq!(m.poll(at(start, 12_000)), Some(MonitorEvent::Expired));
        assert_eq!(m.poll(at(start, 13_000)), None);
        assert_eq!(m.poll(at(start, 60_000)), None);
        assert_eq!(m.seconds_left(), None);
    }

    #[test]
    fn activity_spaced_under_budget_never_expires() {
        let start = Instant::now();
        let mut m = monitor(start);

        // Activity every 6 seconds, well past several budgets' worth of time.
        for i in 1..=10u64 {
            let now = at(start, i * 6_000);
            assert_ne!(m.poll(now), Some(MonitorEvent::Expired));
            m.record_activity(now);
        }
        assert!(!m.warning_active());
    }

    #[test]
    fn activity_before_warning_restarts_elapsed() {
        let start = Instant::now();
        let mut m = monitor(start);

        m.record_activity(at(start, 5_000));
        // Old threshold (7s from start) passes without a warning.
        assert_eq!(m.poll(at(start, 8_000)), None);
        // New threshold is 12s from start.
        assert_eq!(
            m.poll(at(start, 12_000)),
            Some(MonitorEvent::WarningStarted { seconds_left: 3 })
        );
    }

    #[test]
    fn extend_during_warning_is_atomic() {
        let start = Instant::now();
        let mut m = monitor(start);

        m.poll(at(start, 7_000));
        m.poll(at(start, 9_100));
        assert_eq!(m.seconds_left(), Some(1));

        // Extend in the final second: warning state and countdown both reset
        // synchronously, with no stray tick afterwards.
        m.extend(at(start, 9_500));
        assert!(!m.warning_active());
        assert_eq!(m.seconds_left(), None);
        assert_eq!(m.poll(at(start, 9_900)), None);
        assert_eq!(m.poll(at(start, 10_500)), None);

        // Warning re-arms a full budget after the extension.
        assert_eq!(
            m.poll(at(start, 16_500)),
            Some(MonitorEvent::WarningStarted { seconds_left: 3 })
        );
    }

    #[test]
    fn key_activity_dismisses_warning_like_extend() {
        let start = Instant::now();
        let mut m = monitor(start);

        m.poll(at(start, 7_500));
        assert!(m.warning_active());
        m.record_activity(at(start, 7_600));
        assert!(!m.warning_active());
        assert_eq!(m.poll(at(start, 10_000)), None);
    }

    #[test]
    fn stopped_monitor_is_inert() {
        let start = Instant::now();
        let mut m = monitor(start);

        m.poll(at(start, 7_000));
        m.stop();
        assert!(m.is_stopped());
        assert!(!m.warning_active());
        // A pending expiry must never fire after teardown.
        assert_eq!(m.poll(at(start, 20_000)), None);
        m.record_activity(at(start, 21_000));
        assert_eq!(m.poll(at(start, 40_000)), None);
    }

    #[test]
    fn exact_threshold_boundary() {
        let start = Instant::now();
        let mut m = monitor(start);

        // One nanosecond shy of the threshold: still quiet.
        let just_before = start + Duration::from_secs(7) - Duration::from_nanos(1);
        assert_eq!(m.poll(just_before), None);
        // Exactly at the threshold: full warning window.
        assert_eq!(
            m.poll(start + Duration::from_secs(7)),
            Some(MonitorEvent::WarningStarted { seconds_left: 3 })
        );
    }
}
