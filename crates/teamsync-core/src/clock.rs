//! Wall-clock source for display timestamps

use chrono::{Local, NaiveDateTime};

/// Provides the current local wall-clock time
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current local time
    fn now(&self) -> NaiveDateTime;

    /// Current time as `"02:16 PM"`
    fn time_of_day(&self) -> String {
        self.now().format("%I:%M %p").to_string()
    }
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
