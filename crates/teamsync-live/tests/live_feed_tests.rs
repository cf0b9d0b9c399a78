//! Live Feed Tests
//!
//! Timer behavior runs on a paused tokio clock so every firing is
//! deterministic.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::time::Duration;
use teamsync_core::{ActivityKind, DashboardConfig, LiveSettings, TaskId, TaskStatus};
use teamsync_live::{
    share, simulate, EventSource, FeedStats, LiveError, LiveFeed, RngSource, ScriptedSource,
};
use teamsync_test_utils::{empty_dashboard, setup_dashboard};
use tokio::time;

/// Script where every firing passes and picks the first kind, user and task
fn always_fire(firings: usize) -> ScriptedSource {
    ScriptedSource::new((0..firings).flat_map(|_| [0.99, 0.0, 0.0, 0.0]))
}

#[tokio::test(start_paused = true)]
async fn test_fires_every_period() {
    let shared = share(setup_dashboard());
    let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), always_fire(10)).unwrap();

    time::sleep(Duration::from_secs(35)).await;

    let stats = feed.shutdown().await.unwrap();
    assert_eq!(stats, FeedStats { ticks: 3, fired: 3 });

    let guard = shared.lock();
    let feed = guard.activities();
    assert_eq!(feed.len(), 8);
    assert!(feed[..3].iter().all(|a| a.headline() == "Alex Chen updated Homepage Hero Redesign"));
    assert!(feed[..3].iter().all(|a| a.kind == ActivityKind::Task));
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_timer() {
    let shared = share(setup_dashboard());
    let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), always_fire(100)).unwrap();

    time::sleep(Duration::from_secs(25)).await;
    assert_eq!(shared.lock().activity_log().len(), 7);

    drop(feed);
    time::sleep(Duration::from_secs(120)).await;
    assert_eq!(shared.lock().activity_log().len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_further_firings() {
    let shared = share(setup_dashboard());
    let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), always_fire(100)).unwrap();

    time::sleep(Duration::from_secs(15)).await;
    let stats = feed.shutdown().await.unwrap();
    assert_eq!(stats.ticks, 1);

    let before = shared.lock().activities();
    time::sleep(Duration::from_secs(60)).await;
    assert_eq!(shared.lock().activities(), before);
}

#[tokio::test(start_paused = true)]
async fn test_user_moves_and_live_entries_interleave_in_dispatch_order() {
    let shared = share(setup_dashboard());
    let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), always_fire(1)).unwrap();

    time::sleep(Duration::from_secs(5)).await;
    shared.lock().move_task(&TaskId::from("4"), TaskStatus::Done).unwrap();
    time::sleep(Duration::from_secs(10)).await;
    feed.shutdown().await.unwrap();

    let feed = shared.lock().activities();
    assert_eq!(feed[0].action, "updated");
    assert_eq!(feed[1].target, "Database Migration → Done");
}

#[tokio::test(start_paused = true)]
async fn test_custom_period_and_threshold() {
    let shared = share(setup_dashboard());
    let settings = LiveSettings::default()
        .with_tick_secs(2)
        .with_fire_threshold(0.95);
    // 0.9 no longer passes, 0.99 does
    let script = ScriptedSource::new([0.9, 0.99, 0.0, 0.0, 0.0]);
    let feed = LiveFeed::spawn(shared.clone(), &settings, script).unwrap();

    time::sleep(Duration::from_secs(5)).await;
    let stats = feed.shutdown().await.unwrap();
    assert_eq!(stats, FeedStats { ticks: 2, fired: 1 });
}

#[tokio::test(start_paused = true)]
async fn test_toast_for_live_entry() {
    let shared = share(setup_dashboard());
    let mut toasts = shared.lock().subscribe_toasts();
    let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), always_fire(1)).unwrap();

    time::sleep(Duration::from_secs(11)).await;
    feed.shutdown().await.unwrap();

    let toast = toasts.try_recv().unwrap();
    assert_eq!(toast.message, "Alex Chen updated Homepage Hero Redesign");
}

#[test]
fn test_nan_threshold_cannot_make_every_tick_fire() {
    let settings = LiveSettings::default().with_fire_threshold(f64::NAN);
    let result = EventSource::new(ScriptedSource::new([0.0; 40]), &settings);
    assert!(matches!(result, Err(LiveError::Config(_))));
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_fails_at_spawn_not_in_timer() {
    let shared = share(setup_dashboard());
    let settings = LiveSettings::default().with_tick_secs(0);

    let err = LiveFeed::spawn(shared, &settings, always_fire(10)).unwrap_err();
    assert!(err.to_string().contains("live.tick_secs"));
}

#[test]
fn test_simulation_report_carries_final_feed() {
    let mut dashboard = setup_dashboard();
    let mut source = EventSource::new(always_fire(12), &LiveSettings::default()).unwrap();

    let report = simulate(&mut dashboard, &mut source, 12);
    assert_eq!(report.fired.len(), 12);
    assert_eq!(report.entries.len(), 10);
    assert_eq!(report.entries, dashboard.activities());
}

#[test]
fn test_empty_dashboard_never_fires() {
    let mut dashboard = empty_dashboard();
    let mut source = EventSource::new(always_fire(5), &LiveSettings::default()).unwrap();

    let report = simulate(&mut dashboard, &mut source, 5);
    assert!(report.fired.is_empty());
    assert!(dashboard.activity_log().is_empty());
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let run = |seed| {
        let mut dashboard = setup_dashboard();
        let mut source = EventSource::new(RngSource::seeded(seed), &LiveSettings::default()).unwrap();
        simulate(&mut dashboard, &mut source, 50)
            .fired
            .into_iter()
            .map(|a| (a.kind, a.user, a.target))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_synthetic_entries_come_from_roster_and_board() {
    let mut dashboard = setup_dashboard();
    let names: Vec<String> = dashboard.roster().members().iter().map(|m| m.name.clone()).collect();
    let titles: Vec<String> = dashboard.tasks().iter().map(|t| t.title.clone()).collect();
    let mut source = EventSource::new(RngSource::seeded(7), &DashboardConfig::default().live).unwrap();

    let report = simulate(&mut dashboard, &mut source, 200);
    assert!(!report.fired.is_empty());
    for entry in &report.fired {
        assert!(names.contains(&entry.user));
        assert!(titles.contains(&entry.target));
        assert_ne!(entry.kind, ActivityKind::Member);
    }
    assert!(dashboard.activity_log().len() <= 10);
}

proptest! {
    #[test]
    fn prop_feed_capacity_holds_under_simulation(seed in any::<u64>(), ticks in 0u64..120) {
        let mut dashboard = setup_dashboard();
        let mut source = EventSource::new(RngSource::seeded(seed), &LiveSettings::default()).unwrap();
        let report = simulate(&mut dashboard, &mut source, ticks);

        prop_assert!(dashboard.activity_log().len() <= 10);
        if let Some(last) = report.fired.last() {
            prop_assert_eq!(dashboard.activity_log().latest(), Some(last));
        }
    }
}
