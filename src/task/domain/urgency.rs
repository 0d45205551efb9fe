//! Urgency window configuration for due-date classification.

use chrono::Duration;

/// How far ahead of the due date a task counts as urgent.
///
/// The product uses two windows: seven days for general display (red card
/// border) and three days for the dashboard's urgent count. Both are
/// configuration values, not business law; callers pick the window that
/// fits their surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyWindow(Duration);

impl UrgencyWindow {
    /// Days in the general display window.
    pub const DISPLAY_DAYS: i64 = 7;

    /// Days in the dashboard urgent-count window.
    pub const DASHBOARD_DAYS: i64 = 3;

    /// The seven-day general display window.
    #[must_use]
    pub fn display() -> Self {
        Self::days(Self::DISPLAY_DAYS)
    }

    /// The three-day dashboard window.
    #[must_use]
    pub fn dashboard() -> Self {
        Self::days(Self::DASHBOARD_DAYS)
    }

    /// A window of `days` days.
    #[must_use]
    pub fn days(days: i64) -> Self {
        Self(Duration::try_days(days).unwrap_or(Duration::MAX))
    }

    /// Returns the window as a duration.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }
}
