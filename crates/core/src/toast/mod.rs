//! Transient toast notifications.
//!
//! At most one toast is visible at a time. Showing a new toast replaces
//! the active one and restarts the clock; the auto-dismiss timer is
//! token-guarded so an expired timer from a replaced toast never clears
//! its successor.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::constants::DEFAULT_TOAST_SECS;

/// One toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Text shown to the user
    pub message: String,
    /// How long the toast stays up before auto-dismissal
    pub duration: Duration,
    /// Optional fixed width hint for the renderer
    pub width: Option<f64>,
}

impl Toast {
    /// A toast with the default lifetime.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: Duration::from_secs(DEFAULT_TOAST_SECS),
            width: None,
        }
    }

    pub fn with_duration(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
            width: None,
        }
    }
}

struct Inner {
    current: Option<Toast>,
    token: u64,
}

/// Holder for the active toast, shared between services and the renderer.
pub struct ToastState {
    inner: Mutex<Inner>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: None,
                token: 0,
            }),
        }
    }

    /// Show a toast, replacing any active one, and schedule its dismissal.
    pub fn show(self: &Arc<Self>, toast: Toast) {
        let duration = toast.duration;
        let token = {
            let mut inner = self.lock();
            inner.token += 1;
            inner.current = Some(toast);
            inner.token
        };

        let state = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            state.clear_if_current(token);
        });
    }

    /// Clear the active toast immediately.
    pub fn dismiss(&self) {
        let mut inner = self.lock();
        inner.current = None;
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<Toast> {
        self.lock().current.clone()
    }

    fn clear_if_current(&self, token: u64) {
        let mut inner = self.lock();
        if inner.token == token {
            inner.current = None;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
