//! Testing utilities for TeamSync workspace
//!
//! Shared test helpers, fixtures, and clocks.

#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use teamsync_core::{
    Activity, ActivityKind, Clock, Dashboard, DashboardConfig, DashboardSeed, Task, TaskStatus,
};

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        let at = NaiveDate::from_ymd_opt(2024, 12, 20)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid wall-clock time");
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Fixture dashboard with the clock frozen at 2:20 PM
pub fn setup_dashboard() -> Dashboard {
    setup_dashboard_with(DashboardConfig::new())
}

pub fn setup_dashboard_with(config: DashboardConfig) -> Dashboard {
    let seed = DashboardSeed::fixtures(&config.display_name);
    Dashboard::from_seed(config, seed, Arc::new(FixedClock::at(14, 20)))
}

/// Dashboard with no data at all
pub fn empty_dashboard() -> Dashboard {
    Dashboard::from_seed(
        DashboardConfig::new(),
        DashboardSeed::default(),
        Arc::new(FixedClock::at(9, 0)),
    )
}

/// Dashboard whose only content is the given tasks
pub fn dashboard_with_tasks(tasks: Vec<Task>) -> Dashboard {
    let seed = DashboardSeed {
        tasks,
        ..DashboardSeed::default()
    };
    Dashboard::from_seed(DashboardConfig::new(), seed, Arc::new(FixedClock::at(9, 0)))
}

/// `count` tasks with ids "0".."count-1", all in `todo`
pub fn numbered_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|n| Task::new(n.to_string(), format!("Task {n}")).with_status(TaskStatus::Todo))
        .collect()
}

/// A distinguishable feed entry
pub fn numbered_activity(n: usize) -> Activity {
    Activity::just_now(ActivityKind::Task, format!("user{n}"), "touched", format!("item{n}"))
}
