//! # Toast Notifications
//!
//! The only channel through which cart failures reach the shopper.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore ── CartError::toast(op, messages) ──► Toast                 │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                     Arc<dyn ToastSink>::show(toast)    │
//! │                                                   │                     │
//! │                      ┌────────────────────────────┼──────────────┐     │
//! │                      ▼                            ▼              ▼     │
//! │                  ToastLog                  TracingToasts     (tuple)   │
//! │            (CLI stderr, tests)              (log events)     fan-out   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, warn};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Error,
    Warning,
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastLevel::Error => write!(f, "error"),
            ToastLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A short user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Toast {
            level: ToastLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Where toasts are displayed.
pub trait ToastSink: Send + Sync {
    fn show(&self, toast: Toast);
}

/// Fan-out to two sinks.
impl<A: ToastSink, B: ToastSink> ToastSink for (A, B) {
    fn show(&self, toast: Toast) {
        self.0.show(toast.clone());
        self.1.show(toast);
    }
}

/// Records toasts in order until drained.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct ToastLog {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything shown so far.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Takes everything shown so far, leaving the log empty.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ToastSink for ToastLog {
    fn show(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

/// Emits toasts as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn show(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => error!(toast = %toast.message, "Toast shown"),
            ToastLevel::Warning => warn!(toast = %toast.message, "Toast shown"),
        }
    }
}
