//! Logger module
//!
//! Plain-text logging for the server: lifecycle lines, the per-request
//! line, and access log entries. Info and access lines go to stdout,
//! errors and warnings to stderr.

mod format;

pub use format::AccessLogEntry;

use hyper::Method;
use std::path::Path;

/// Startup banner, printed once after the listener is bound
pub fn log_server_start(port: u16, root: &Path) {
    println!("Server running at http://localhost:{port}/");
    println!("Serving files from: {}", root.display());
    println!("Press Ctrl+C to stop the server");
}

/// Per-request line, printed before any other logging for the request
pub fn log_request(method: &Method, path: &str) {
    println!("Request: {method} {path}");
}

/// Formatted access log entry, printed after the response is produced
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

/// Shutdown confirmation, printed exactly once on the cancellation path
pub fn log_server_stopped() {
    println!("Server stopped.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
