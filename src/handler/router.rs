//! Request dispatch module
//!
//! Entry point for HTTP request processing: per-request logging, method
//! validation, and static file dispatch.

use crate::config::Config;
use crate::handler::static_files::{self, FileLookup};
use crate::http::{self, response};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    // Contract: this line precedes all other logging for the request
    logger::log_request(&method, &path);

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        path.clone(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let response = match method {
        Method::GET | Method::HEAD => serve_path(&config, &path, is_head).await,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.request_time_us =
        u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    if config.logging.access_log {
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the request path below the serving root and build the response
async fn serve_path(config: &Config, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match static_files::load(
        &config.serving.root,
        path,
        &config.serving.index_files,
    )
    .await
    {
        FileLookup::Found(content, content_type) => {
            response::build_file_response(Bytes::from(content), content_type, is_head)
        }
        FileLookup::NotFound => http::build_404_response(),
        FileLookup::ReadError(e) => {
            logger::log_error(&format!("Failed to read file for '{path}': {e}"));
            http::build_500_response()
        }
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
