//! Task scope bound to a controller's lifetime.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Owns every background task a controller starts.
///
/// Operations (`launch`) are tracked so callers can wait for them with
/// `idle`. Observers (`observe`) follow a stream for the controller's whole
/// life and are not waited on. Cancelling (or dropping) the scope stops
/// both at their next suspension point; nothing starts after cancellation.
pub struct ControllerScope {
    name: &'static str,
    token: CancellationToken,
    tracker: TaskTracker,
}

impl ControllerScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            token: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    /// Token cancelled together with the scope.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Spawn a one-off operation inside the scope.
    pub fn launch<F>(&self, task: &'static str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(fut) = self.guard(task, fut) {
            self.tracker.spawn(fut);
        }
    }

    /// Spawn a long-running observer inside the scope.
    pub fn observe<F>(&self, task: &'static str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(fut) = self.guard(task, fut) {
            tokio::spawn(fut);
        }
    }

    fn guard<F>(
        &self,
        task: &'static str,
        fut: F,
    ) -> Option<impl Future<Output = ()> + Send + 'static>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.token.is_cancelled() {
            tracing::trace!(scope = self.name, task, "Scope cancelled, task not started");
            return None;
        }
        let token = self.token.clone();
        let scope = self.name;
        Some(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::trace!(scope, task, "Scoped task cancelled");
                }
                _ = fut => {}
            }
        })
    }

    /// Wait until every launched operation has finished.
    pub async fn idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(scope = self.name, "Controller scope cancelled");
        }
        self.token.cancel();
        self.tracker.close();
    }
}

impl Drop for ControllerScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
