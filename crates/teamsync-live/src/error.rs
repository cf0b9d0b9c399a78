//! Error types for the live feed

use teamsync_core::ConfigError;

/// Live feed errors
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    /// Feed switched off in configuration
    #[error("live feed is disabled")]
    Disabled,

    /// Feed task panicked or was aborted before it could report
    #[error("feed task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_error_display() {
        assert_eq!(LiveError::Disabled.to_string(), "live feed is disabled");
        let err: LiveError = ConfigError::invalid("live.tick_secs", "must be at least 1").into();
        assert!(err.to_string().contains("live.tick_secs"));
    }
}
