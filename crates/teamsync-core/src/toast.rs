//! Transient toast side-channel
//!
//! Toasts carry no state; a publish with no subscribers is dropped.

use serde::Serialize;
use tokio::sync::broadcast;

/// Default number of toasts a slow subscriber may lag behind
pub const TOAST_BUFFER: usize = 64;

/// Toast tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A display-only acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    #[inline]
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Fan-out publisher for toasts
#[derive(Debug, Clone)]
pub struct ToastChannel {
    sender: broadcast::Sender<Toast>,
}

impl ToastChannel {
    #[must_use]
    pub fn new(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer.max(1));
        Self { sender }
    }

    /// Publish; returns the number of subscribers reached
    pub fn publish(&self, toast: Toast) -> usize {
        tracing::trace!("Toast {:?}: {}", toast.kind, toast.message);
        self.sender.send(toast).unwrap_or(0)
    }

    /// New subscriber, sees toasts published from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }
}

impl Default for ToastChannel {
    fn default() -> Self {
        Self::new(TOAST_BUFFER)
    }
}
