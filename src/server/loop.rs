// Accept loop module
// Runs the accept loop until shutdown is signalled, then drains
// in-flight connections

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::ShutdownSignal;
use crate::config::Config;
use crate::logger;

/// How long shutdown waits for in-flight connections to finish
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept connections until `shutdown` fires.
///
/// Returns once the listener has been dropped (no new connections) and
/// in-flight connections have drained or the grace period elapsed.
pub async fn run(listener: TcpListener, config: Arc<Config>, shutdown: Arc<ShutdownSignal>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => {
                break;
            }
        }
    }

    // Stop accepting before draining
    drop(listener);
    drain_connections(&active_connections).await;
}

/// Wait for in-flight connections to finish, bounded by `SHUTDOWN_GRACE`
async fn drain_connections(active_connections: &Arc<AtomicUsize>) {
    let deadline = tokio::time::Instant::now() + SHUTDOWN_GRACE;

    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period elapsed with {} connection(s) still open",
                active_connections.load(Ordering::SeqCst)
            ));
            break;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
