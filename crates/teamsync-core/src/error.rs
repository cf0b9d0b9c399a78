//! Error types for TeamSync Core
//!
//! Every store operation is total over its own state: on error nothing is
//! mutated, no activity is recorded and no toast is published.

use crate::types::{ChannelId, NotificationId, TaskId};
use std::path::PathBuf;

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// No task with this id
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No notification with this id
    #[error("notification not found: {0}")]
    NotificationNotFound(NotificationId),

    /// No channel or direct conversation with this id
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),

    /// Comment text was blank
    #[error("comment text is empty")]
    EmptyComment,

    /// Message text was blank
    #[error("message text is empty")]
    EmptyMessage,

    /// Status name not one of todo / inprogress / done
    #[error("unknown task status: '{0}'")]
    UnknownStatus(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DashboardError {
    /// Check if error is a missing-entity lookup
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound(_) | Self::NotificationNotFound(_) | Self::ChannelNotFound(_)
        )
    }

    /// Check if error came from rejected user input
    #[inline]
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyComment | Self::EmptyMessage | Self::UnknownStatus(_)
        )
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create out-of-range error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
