//! TeamSync Live - simulated real-time activity
//!
//! A periodic timer that, with fixed probability per firing, synthesizes an
//! activity entry and appends it to the dashboard's feed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use teamsync_live::prelude::*;
//!
//! let shared = share(Dashboard::new(DashboardConfig::new()));
//! let feed = LiveFeed::spawn(shared.clone(), &LiveSettings::default(), RngSource::from_entropy())?;
//!
//! // ... view layer reads `shared` ...
//!
//! let stats = feed.shutdown().await?;
//! ```

#![allow(missing_docs)]

pub mod error;
pub mod feed;
pub mod random;
pub mod source;

pub use error::LiveError;
pub use feed::{share, FeedStats, LiveFeed, SharedDashboard};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use source::{simulate, EventSource, SimulationReport, SYNTHETIC_ACTION, SYNTHETIC_KINDS};

/// Common imports for driving the live feed
pub mod prelude {
    pub use crate::{share, EventSource, LiveFeed, RandomSource, RngSource, SharedDashboard};
    pub use teamsync_core::{Dashboard, DashboardConfig, LiveSettings};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
