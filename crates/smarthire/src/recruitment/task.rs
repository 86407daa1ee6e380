//! Delayed background work with observable state and cancellation.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{oneshot, watch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum TaskState<T> {
    Pending,
    Succeeded(T),
    Failed(String),
    Cancelled,
}

impl<T> TaskState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskState::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Succeeded(_) => "succeeded",
            TaskState::Failed(_) => "failed",
            TaskState::Cancelled => "cancelled",
        }
    }
}

/// Handle to work that runs once after a delay.
///
/// Dropping the handle before the delay elapses cancels the work.
pub struct ProcessingTask<T> {
    state: watch::Receiver<TaskState<T>>,
    cancel: Option<oneshot::Sender<()>>,
}

impl<T> ProcessingTask<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawn `work` on the current tokio runtime after `delay`.
    pub fn spawn<F>(delay: Duration, work: F) -> Self
    where
        F: FnOnce() -> Result<T, String> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(TaskState::Pending);
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = &mut cancel_rx => {
                    state_tx.send_replace(TaskState::Cancelled);
                }
                _ = tokio::time::sleep(delay) => {
                    let outcome = match work() {
                        Ok(value) => TaskState::Succeeded(value),
                        Err(reason) => TaskState::Failed(reason),
                    };
                    state_tx.send_replace(outcome);
                }
            }
        });

        Self {
            state: state_rx,
            cancel: Some(cancel_tx),
        }
    }

    pub fn state(&self) -> TaskState<T> {
        self.state.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        !self.state.borrow().is_pending()
    }

    /// Request cancellation; returns `false` once the task has already settled.
    pub fn cancel(&mut self) -> bool {
        if !self.state.borrow().is_pending() {
            return false;
        }
        match self.cancel.take() {
            Some(sender) => sender.send(()).is_ok(),
            None => false,
        }
    }

    /// Wait until the task leaves `Pending`.
    pub async fn wait(&mut self) -> TaskState<T> {
        settle(&mut self.state).await
    }

    /// Read-only view of the same task that can outlive a registry lock.
    pub fn observer(&self) -> TaskObserver<T> {
        TaskObserver {
            state: self.state.clone(),
        }
    }
}

/// Watches a [`ProcessingTask`] without the ability to cancel it.
#[derive(Clone)]
pub struct TaskObserver<T> {
    state: watch::Receiver<TaskState<T>>,
}

impl<T: Clone> TaskObserver<T> {
    pub fn state(&self) -> TaskState<T> {
        self.state.borrow().clone()
    }

    pub async fn wait(&mut self) -> TaskState<T> {
        settle(&mut self.state).await
    }
}

async fn settle<T: Clone>(state: &mut watch::Receiver<TaskState<T>>) -> TaskState<T> {
    match state.wait_for(|state| !state.is_pending()).await {
        Ok(state) => state.clone(),
        Err(_) => TaskState::Failed("processing task stopped unexpectedly".to_string()),
    }
}
