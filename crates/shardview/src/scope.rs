//! The process-wide task scope.
//!
//! All fire-and-forget work spawned from event handling attaches to one
//! [`TaskScope`], created at plugin enable and torn down at disable. The
//! scope supervises nothing beyond lifetime: tasks are isolated from each
//! other (a panic in one cancels no sibling), and shutdown cancels every
//! in-flight await before waiting for the stragglers to finish.

use std::future::Future;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, trace};

/// Owns the lifetime of asynchronous work spawned by event handlers.
///
/// The scope captures a runtime handle at construction and schedules every
/// task onto it, so [`spawn`](Self::spawn) is safe from any thread — in
/// particular from the host's own event thread, which is not a runtime
/// worker.
///
/// `spawn` is safe to call concurrently from simultaneous events; task
/// registration is append-only and there is no shared business state.
#[derive(Debug)]
pub struct TaskScope {
    tracker: TaskTracker,
    token: CancellationToken,
    runtime: Handle,
}

impl TaskScope {
    /// Creates a scope that schedules its tasks onto `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            tracker: TaskTracker::new(),
            token: CancellationToken::new(),
            runtime,
        }
    }

    /// Schedules `work` to run asynchronously and returns immediately.
    ///
    /// Never blocks and never panics, regardless of the calling thread.
    /// After [`shutdown`](Self::shutdown) has begun the work is silently
    /// dropped; the recipient's session is ending anyway.
    pub fn spawn<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.token.is_cancelled() {
            trace!("Scope is shut down, dropping task");
            return;
        }

        let token = self.token.clone();
        self.tracker.spawn_on(
            async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = work => {}
                }
            },
            &self.runtime,
        );
    }

    /// Returns `true` once shutdown has begun.
    pub fn is_shutdown(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Number of tasks currently tracked by the scope.
    pub fn task_count(&self) -> usize {
        self.tracker.len()
    }

    /// Cancels in-flight work and waits until every previously spawned task
    /// has observably finished or been cancelled.
    ///
    /// No new work is accepted once this has been called.
    pub async fn shutdown(&self) {
        debug!(in_flight = self.tracker.len(), "Shutting down task scope");
        self.token.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        debug!("Task scope drained");
    }
}
