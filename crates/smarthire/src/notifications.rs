//! Transient toast notifications.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Store, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Anything that can surface a message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity) -> ToastId;
}

/// Queue of visible toasts; clones share the same queue.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Arc<Store<Vec<Toast>>>,
    ttl: chrono::Duration,
    next_id: Arc<AtomicU64>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::seconds(3));
        Self {
            toasts: Arc::new(Store::new(Vec::new())),
            ttl,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.show_at(message, severity, Utc::now())
    }

    pub fn show_at(
        &self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
            expires_at: now + self.ttl,
        };
        debug!(toast_id = id.0, ?severity, message = %toast.message, "toast queued");
        self.toasts.update(|toasts| toasts.push(toast));
        id
    }

    /// Returns `false` if the toast was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        if !self.toasts.get().iter().any(|toast| toast.id == id) {
            return false;
        }
        self.toasts.update(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| toast.id != id);
            toasts.len() != before
        })
    }

    /// Drop expired toasts and return how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let expired = self
            .toasts
            .get()
            .iter()
            .filter(|toast| toast.is_expired(now))
            .count();
        if expired == 0 {
            return 0;
        }
        self.toasts
            .update(|toasts| toasts.retain(|toast| !toast.is_expired(now)));
        expired
    }

    /// Toasts still visible at `now`; expired ones are pruned first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Toast> {
        self.prune(now);
        self.toasts.get()
    }

    /// Everything queued, expired or not.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.get().last().cloned()
    }

    pub fn subscribe(&self, listener: impl Fn(&Vec<Toast>) + Send + Sync + 'static) -> SubscriptionId {
        self.toasts.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.toasts.unsubscribe(id)
    }

    /// Periodically prune expired toasts on the current tokio runtime.
    pub fn spawn_sweeper(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let queue = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let removed = queue.prune(Utc::now());
                if removed > 0 {
                    debug!(removed, "expired toasts dismissed");
                }
            }
        })
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) -> ToastId {
        self.show(message, severity)
    }
}
