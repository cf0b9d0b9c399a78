//! TeamSync Core - task and activity state store
//!
//! The in-memory model behind the collaboration dashboard:
//! - Task Store with unconstrained status moves
//! - Bounded, most-recent-first Activity Log
//! - Notification Store (mark read, dismiss)
//! - Comment threads, channels and messages
//! - Read-only team roster and derived stats
//!
//! # Example
//!
//! ```rust
//! use teamsync_core::{Dashboard, DashboardConfig, TaskId, TaskStatus};
//!
//! let mut dashboard = Dashboard::new(DashboardConfig::new());
//! dashboard.move_task(&TaskId::from("4"), TaskStatus::Done).unwrap();
//!
//! let head = &dashboard.activities()[0];
//! assert_eq!(head.target, "Database Migration → Done");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod activity_log;
pub mod clock;
pub mod config;
pub mod conversations;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod notifications;
pub mod task_store;
pub mod team;
pub mod toast;
pub mod types;

// Re-exports for convenience
pub use activity_log::ActivityLog;
pub use clock::{Clock, SystemClock};
pub use config::{DashboardConfig, LiveSettings};
pub use conversations::{ChannelStore, CommentThreads};
pub use dashboard::{Dashboard, DashboardSeed, DashboardSnapshot, QuickStats};
pub use error::{ConfigError, DashboardError};
pub use notifications::NotificationStore;
pub use task_store::{TaskMove, TaskStore};
pub use team::{Roster, TeamStats};
pub use toast::{Toast, ToastChannel, ToastKind};
pub use types::{
    Activity, ActivityId, ActivityKind, Channel, ChannelId, ChannelKind, Comment, MemberId,
    MemberStatus, Message, MessageId, Notification, NotificationId, NotificationKind, Priority,
    Task, TaskId, TaskStatus, TeamMember,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with TeamSync Core
    pub use crate::{
        Activity, ActivityKind, Dashboard, DashboardConfig, DashboardError, NotificationId,
        TaskId, TaskStatus, Toast,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
