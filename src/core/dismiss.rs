use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Holds at most one pending delayed task, tagged with the submit cycle that
/// scheduled it. A newer cycle replaces (and aborts) an older one; a late
/// schedule from an older cycle never displaces a newer pending task.
#[derive(Debug, Default)]
pub struct DismissTimer {
    pending: Mutex<Option<Pending>>,
}

#[derive(Debug)]
struct Pending {
    cycle: u64,
    handle: JoinHandle<()>,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` after `delay` unless cancelled first. Returns `false` when
    /// a task from a newer cycle is still pending and `task` was dropped.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, cycle: u64, delay: Duration, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.slot();
        if let Some(current) = slot.as_ref() {
            if current.cycle > cycle && !current.handle.is_finished() {
                tracing::debug!(cycle, pending = current.cycle, "Skipping stale dismissal");
                return false;
            }
        }

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        if let Some(previous) = slot.replace(Pending { cycle, handle }) {
            previous.handle.abort();
        }
        true
    }

    pub fn cancel(&self) {
        if let Some(pending) = self.slot().take() {
            pending.handle.abort();
            tracing::debug!(cycle = pending.cycle, "Cancelled pending status dismissal");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|p| !p.handle.is_finished())
    }

    /// Cycle of the task currently waiting, if any.
    pub fn pending_cycle(&self) -> Option<u64> {
        self.slot()
            .as_ref()
            .filter(|p| !p.handle.is_finished())
            .map(|p| p.cycle)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Pending>> {
        // A panic while holding this lock leaves nothing half-updated.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
