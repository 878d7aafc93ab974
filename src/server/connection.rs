// Connection handling module
// Serves a single accepted TCP connection on a spawned task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it on its own task.
///
/// The counter tracks in-flight connections so shutdown can wait for
/// them to drain.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    config: &Arc<Config>,
    conn_counter: &Arc<AtomicUsize>,
) {
    conn_counter.fetch_add(1, Ordering::SeqCst);

    let config = Arc::clone(config);
    let conn_counter = Arc::clone(conn_counter);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
