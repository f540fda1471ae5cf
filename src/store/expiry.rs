use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Handle to a scheduled expiry task.
///
/// Dropping the handle aborts the task. Aborting cannot retract a task that has already woken up,
/// so the callback must check on its own whether it is still relevant.
#[derive(Debug)]
pub(crate) struct Expiry {
    handle: AbortHandle,
}

impl Expiry {
    /// Spawns a task on `runtime` that calls `on_expiry` once `delay` has elapsed.
    pub(crate) fn schedule<F>(runtime: &Handle, delay: Duration, on_expiry: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let join_handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_expiry();
        });

        Self {
            handle: join_handle.abort_handle(),
        }
    }

    pub(crate) fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for Expiry {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
