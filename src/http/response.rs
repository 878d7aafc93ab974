//! HTTP response building module
//!
//! Builders for the response shapes the server produces, decoupled from
//! file-serving logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response carrying file content
///
/// HEAD requests get the same headers with an empty body.
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body as _;

    #[test]
    fn test_file_response_carries_content() {
        let resp = build_file_response(Bytes::from_static(b"hello"), "text/plain; charset=utf-8", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "5");
        assert_eq!(resp.body().size_hint().exact(), Some(5));
    }

    #[test]
    fn test_head_response_has_empty_body() {
        let resp = build_file_response(Bytes::from_static(b"hello"), "text/plain; charset=utf-8", true);
        assert_eq!(resp.status(), 200);
        // Content-Length still advertises the file size
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "5");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_500_response().status(), 500);
        assert_eq!(
            build_405_response().headers().get("Allow").unwrap(),
            "GET, HEAD"
        );
    }
}
