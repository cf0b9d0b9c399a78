//! Simulated Event Source
//!
//! One firing of the live timer: draw, compare against the threshold, and
//! if it passes synthesize an `"updated"` entry from a random member and a
//! random task. Draw order is fixed: threshold, kind, user, target.

use crate::error::LiveError;
use crate::random::RandomSource;
use serde::Serialize;
use teamsync_core::{Activity, ActivityKind, ConfigError, Dashboard, LiveSettings, TeamMember};

/// Kinds a synthetic entry can take
pub const SYNTHETIC_KINDS: [ActivityKind; 3] =
    [ActivityKind::Task, ActivityKind::Comment, ActivityKind::File];

/// Action text on every synthetic entry
pub const SYNTHETIC_ACTION: &str = "updated";

/// Generates fake activity from an injected random source
#[derive(Debug, Clone)]
pub struct EventSource<S> {
    random: S,
    threshold: f64,
}

impl<S: RandomSource> EventSource<S> {
    /// Create source using the configured firing threshold
    ///
    /// # Errors
    /// `LiveError::Config` if the threshold is not a number in `[0, 1]`.
    #[inline]
    pub fn new(random: S, settings: &LiveSettings) -> Result<Self, LiveError> {
        Self::with_threshold(random, settings.fire_threshold)
    }

    /// Create source with an explicit threshold
    ///
    /// # Errors
    /// `LiveError::Config` if `threshold` is NaN, infinite or outside `[0, 1]`.
    pub fn with_threshold(random: S, threshold: f64) -> Result<Self, LiveError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::invalid(
                "live.fire_threshold",
                format!("{threshold} is outside [0, 1]"),
            )
            .into());
        }
        Ok(Self { random, threshold })
    }

    /// Build one entry, or `None` if the draw did not exceed the threshold
    /// or there is nobody or nothing to pick from.
    pub fn synthesize(&mut self, members: &[TeamMember], titles: &[&str]) -> Option<Activity> {
        let draw = self.random.next_unit();
        if draw <= self.threshold {
            tracing::trace!("Tick skipped (draw {:.3})", draw);
            return None;
        }
        if members.is_empty() || titles.is_empty() {
            tracing::debug!("Tick fired with empty roster or board");
            return None;
        }

        let kind = SYNTHETIC_KINDS[self.random.pick(SYNTHETIC_KINDS.len())];
        let user = &members[self.random.pick(members.len())].name;
        let target = titles[self.random.pick(titles.len())];

        Some(Activity::just_now(kind, user.clone(), SYNTHETIC_ACTION, target))
    }

    /// One timer firing against a dashboard
    ///
    /// A produced entry is appended to the feed and announced as a toast.
    pub fn tick(&mut self, dashboard: &mut Dashboard) -> Option<Activity> {
        let activity = {
            let titles = dashboard.task_store().titles();
            self.synthesize(dashboard.roster().members(), &titles)?
        };
        dashboard.ingest_activity(activity.clone());
        Some(activity)
    }

    /// Borrow the random source
    #[inline]
    #[must_use]
    pub fn random(&self) -> &S {
        &self.random
    }
}

/// Outcome of a synchronous simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Timer firings simulated
    pub ticks: u64,
    /// Entries produced, in firing order
    pub fired: Vec<Activity>,
    /// Feed contents after the run, most recent first
    pub entries: Vec<Activity>,
}

impl SimulationReport {
    /// Share of firings that produced an entry
    #[must_use]
    pub fn fire_rate(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.fired.len() as f64 / self.ticks as f64;
        rate
    }

    /// Generate text report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();
        report.push_str("=== TeamSync Live Feed Simulation ===\n\n");
        report.push_str(&format!("Ticks: {}\n", self.ticks));
        report.push_str(&format!("Events: {}\n", self.fired.len()));
        report.push_str(&format!("Fire rate: {:.1}%\n", self.fire_rate() * 100.0));
        if !self.fired.is_empty() {
            report.push('\n');
            for entry in &self.fired {
                report.push_str(&format!("  [{:?}] {}\n", entry.kind, entry.headline()));
            }
        }
        report
    }
}

/// Run `ticks` firings back to back, without a timer
pub fn simulate<S: RandomSource>(
    dashboard: &mut Dashboard,
    source: &mut EventSource<S>,
    ticks: u64,
) -> SimulationReport {
    let fired = (0..ticks).filter_map(|_| source.tick(dashboard)).collect();
    SimulationReport {
        ticks,
        fired,
        entries: dashboard.activities(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use teamsync_core::{DashboardConfig, Toast};

    fn scripted(draws: &[f64]) -> EventSource<ScriptedSource> {
        EventSource::new(ScriptedSource::new(draws.iter().copied()), &LiveSettings::default())
            .unwrap()
    }

    #[test]
    fn draw_at_threshold_does_not_fire() {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let mut source = scripted(&[0.7]);
        assert!(source.tick(&mut dashboard).is_none());
        assert_eq!(dashboard.activity_log().len(), 5);
    }

    #[test]
    fn draw_above_threshold_fires() {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let mut toasts = dashboard.subscribe_toasts();
        // kind 0.4*3 -> comment, user 0.5*6 -> Emily White, target 0.99*6 -> Security Audit
        let mut source = scripted(&[0.71, 0.4, 0.5, 0.99]);

        let entry = source.tick(&mut dashboard).unwrap();
        assert_eq!(entry.kind, ActivityKind::Comment);
        assert_eq!(entry.user, "Emily White");
        assert_eq!(entry.action, "updated");
        assert_eq!(entry.target, "Security Audit");
        assert_eq!(entry.time, "just now");
        assert!(entry.is_new);

        assert_eq!(dashboard.activities()[0], entry);
        assert_eq!(
            toasts.try_recv().unwrap(),
            Toast::success("Emily White updated Security Audit")
        );
    }

    #[test]
    fn empty_roster_never_fires() {
        let mut source = scripted(&[0.9, 0.0, 0.0, 0.0]);
        assert!(source.synthesize(&[], &["A task"]).is_none());
    }

    #[test]
    fn simulate_collects_fired_entries() {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let mut source = scripted(&[0.1, 0.95, 0.0, 0.0, 0.0, 0.3]);

        let report = simulate(&mut dashboard, &mut source, 3);
        assert_eq!(report.ticks, 3);
        assert_eq!(report.fired.len(), 1);
        assert_eq!(report.fired[0].headline(), "Alex Chen updated Homepage Hero Redesign");
        assert!(report.generate_text().contains("Events: 1"));

        assert_eq!(report.entries.len(), 6);
        assert_eq!(report.entries[0], report.fired[0]);
        assert_eq!(report.entries, dashboard.activities());
    }

    #[test]
    fn rejects_threshold_that_is_not_a_probability() {
        for threshold in [f64::NAN, f64::INFINITY, 1.5, -0.2] {
            let result = EventSource::with_threshold(ScriptedSource::default(), threshold);
            assert!(matches!(result, Err(LiveError::Config(_))));
        }

        let settings = LiveSettings::default().with_fire_threshold(f64::NAN);
        assert!(EventSource::new(ScriptedSource::default(), &settings).is_err());
    }

    #[test]
    fn boundary_thresholds_accepted() {
        // 1.0 never fires, 0.0 fires on any positive draw
        let mut never = EventSource::with_threshold(ScriptedSource::new([0.999_999]), 1.0).unwrap();
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        assert!(never.tick(&mut dashboard).is_none());

        let mut always =
            EventSource::with_threshold(ScriptedSource::new([0.01, 0.0, 0.0, 0.0]), 0.0).unwrap();
        assert!(always.tick(&mut dashboard).is_some());
    }
}
