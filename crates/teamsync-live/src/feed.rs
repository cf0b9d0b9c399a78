//! Live feed driver
//!
//! Runs the event source on a periodic tokio timer. The first firing
//! happens one period after spawn. The timer is owned by [`LiveFeed`]:
//! `shutdown` stops it cleanly, dropping the handle aborts it.

use crate::error::LiveError;
use crate::random::RandomSource;
use crate::source::EventSource;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use teamsync_core::{Dashboard, LiveSettings};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Dashboard shared between view handlers and the feed task
pub type SharedDashboard = Arc<Mutex<Dashboard>>;

/// Wrap a dashboard for sharing
#[must_use]
pub fn share(dashboard: Dashboard) -> SharedDashboard {
    Arc::new(Mutex::new(dashboard))
}

/// Counters reported when the feed stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Timer firings
    pub ticks: u64,
    /// Firings that produced an entry
    pub fired: u64,
}

/// Handle to a running live feed
#[derive(Debug)]
pub struct LiveFeed {
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<FeedStats>>,
    period: Duration,
}

impl LiveFeed {
    /// Start the feed on the current tokio runtime
    ///
    /// # Errors
    /// - `LiveError::Disabled` if `settings.enabled` is false
    /// - `LiveError::Config` if the period is zero or the threshold is not in `[0, 1]`
    pub fn spawn<S>(
        dashboard: SharedDashboard,
        settings: &LiveSettings,
        random: S,
    ) -> Result<Self, LiveError>
    where
        S: RandomSource + 'static,
    {
        if !settings.enabled {
            return Err(LiveError::Disabled);
        }
        settings.validate()?;

        let period = settings.period();
        let source = EventSource::new(random, settings)?;
        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(run_feed(dashboard, source, period, stop_rx));
        tracing::debug!("Live feed started, period {:?}", period);

        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
            period,
        })
    }

    /// Timer period
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the timer and wait for the task to finish
    ///
    /// # Errors
    /// `LiveError::Join` if the feed task panicked.
    pub async fn shutdown(mut self) -> Result<FeedStats, LiveError> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        let stats = match self.handle.take() {
            Some(handle) => handle.await?,
            None => FeedStats::default(),
        };
        tracing::debug!("Live feed stopped after {} ticks ({} fired)", stats.ticks, stats.fired);
        Ok(stats)
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run_feed<S: RandomSource>(
    dashboard: SharedDashboard,
    mut source: EventSource<S>,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
) -> FeedStats {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut stats = FeedStats::default();

    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = interval.tick() => {
                stats.ticks += 1;
                let fired = {
                    let mut guard = dashboard.lock();
                    source.tick(&mut guard)
                };
                if fired.is_some() {
                    stats.fired += 1;
                }
            }
        }
    }

    stats
}
