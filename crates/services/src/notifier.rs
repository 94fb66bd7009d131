use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

pub const NO_ANSWERS_MESSAGE: &str = "Please provide at least one answer";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit answers";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Transient, non-blocking notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub duration: Duration,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            title: title.into(),
            duration: TOAST_DURATION,
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            title: title.into(),
            duration: TOAST_DURATION,
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// In-memory notifier. The UI drains it after each action and renders the
/// toasts; tests inspect it directly.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pending: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued toast, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Toast> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(toast);
    }
}
