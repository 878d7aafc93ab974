// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) both trigger graceful shutdown of the
// accept loop. On non-Unix platforms only Ctrl+C is handled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Shutdown notification shared between the signal listener and the
/// accept loop
pub struct ShutdownSignal {
    notify: Notify,
    requested: AtomicBool,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            notify: Notify::new(),
            requested: AtomicBool::new(false),
        }
    }

    /// Mark shutdown as requested and wake all waiters
    pub fn trigger(&self) {
        self.requested.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Resolve once shutdown has been requested.
    ///
    /// Returns immediately when the request predates the call, so a
    /// signal arriving before the accept loop starts is not lost.
    pub async fn wait(&self) {
        if self.requested.load(Ordering::SeqCst) {
            return;
        }
        self.notify.notified().await;
    }

}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix)
#[cfg(unix)]
pub fn start_signal_listener(shutdown: Arc<ShutdownSignal>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        shutdown.trigger();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_listener(shutdown: Arc<ShutdownSignal>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn wait_resolves_after_trigger() {
        let shutdown = Arc::new(ShutdownSignal::new());
        let waiter = Arc::clone(&shutdown);
        let handle = tokio::spawn(async move { waiter.wait().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("wait should resolve once triggered")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_resolves_immediately_when_already_triggered() {
        let shutdown = ShutdownSignal::new();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_millis(100), shutdown.wait())
            .await
            .expect("pre-triggered wait should not block");
    }
}
