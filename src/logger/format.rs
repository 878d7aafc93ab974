//! Access log format module
//!
//! Supports multiple log formats:
//! - `common` (Common Log Format - CLF, the default)
//! - `combined` (Apache/Nginx combined format)
//! - `json` (JSON structured lines)
//! - Custom patterns with `$variable` substitution

use chrono::Local;

/// Access log entry containing the request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "combined" => self.format_combined(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    /// Request URI including the query string, if any
    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    /// Request line as it appears in quoted log fields
    fn request_line(&self) -> String {
        format!(
            "{} {} HTTP/{}",
            self.method,
            self.request_uri(),
            self.http_version
        )
    }

    fn time_local(&self) -> String {
        self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string()
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time_local(),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// JSON lines format
    fn format_json(&self) -> String {
        // Manual JSON building, the field set is small and fixed
        let optional = |value: &Option<String>| {
            value
                .as_ref()
                .map_or_else(|| "null".to_string(), |v| format!("\"{}\"", escape_json(v)))
        };

        format!(
            r#"{{"remote_addr":"{}","time":"{}","method":"{}","path":"{}","query":{},"http_version":"{}","status":{},"body_bytes":{},"referer":{},"user_agent":{},"request_time_us":{}}}"#,
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            optional(&self.query),
            escape_json(&self.http_version),
            self.status,
            self.body_bytes,
            optional(&self.referer),
            optional(&self.user_agent),
            self.request_time_us,
        )
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables:
    /// - `$remote_addr` - Client IP address
    /// - `$time_local` - Local time in Common Log Format
    /// - `$time_iso8601` - ISO 8601 timestamp
    /// - `$request` - Full request line ("METHOD /path HTTP/version")
    /// - `$request_method` - HTTP method
    /// - `$request_uri` - Request URI with query string
    /// - `$request_time` - Processing time in seconds (3 decimal places)
    /// - `$status` - Response status code
    /// - `$body_bytes_sent` - Response body size
    /// - `$http_referer` - Referer header
    /// - `$http_user_agent` - User-Agent header
    fn format_custom(&self, pattern: &str) -> String {
        let mut result = pattern.to_string();

        result = result.replace("$remote_addr", &self.remote_addr);
        result = result.replace("$time_local", &self.time_local());
        result = result.replace("$time_iso8601", &self.time.to_rfc3339());
        // Longer variables first so $request does not eat $request_time
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;
        result = result.replace("$request_time", &format!("{request_time:.3}"));
        result = result.replace("$request_method", &self.method);
        result = result.replace("$request_uri", &self.request_uri());
        result = result.replace("$request", &self.request_line());
        result = result.replace("$status", &self.status.to_string());
        result = result.replace("$body_bytes_sent", &self.body_bytes.to_string());
        result = result.replace("$http_referer", self.referer.as_deref().unwrap_or("-"));
        result = result.replace(
            "$http_user_agent",
            self.user_agent.as_deref().unwrap_or("-"),
        );

        result
    }
}

/// Escape special characters for JSON string
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/assets/app.js".to_string(),
        );
        entry.query = Some("v=3".to_string());
        entry.status = 200;
        entry.body_bytes = 2048;
        entry.referer = Some("http://localhost:3000/".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.request_time_us = 420;
        entry
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format("common");
        assert!(log.starts_with("127.0.0.1 - - ["));
        assert!(log.contains("\"GET /assets/app.js?v=3 HTTP/1.1\""));
        assert!(log.ends_with("200 2048"));
        // Common format carries no referer/user-agent
        assert!(!log.contains("Mozilla"));
    }

    #[test]
    fn test_format_combined_extends_common() {
        let entry = create_test_entry();
        let log = entry.format("combined");
        assert!(log.contains("\"GET /assets/app.js?v=3 HTTP/1.1\""));
        assert!(log.contains("\"http://localhost:3000/\""));
        assert!(log.ends_with("\"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let log = entry.format("json");
        assert!(log.contains(r#""remote_addr":"127.0.0.1""#));
        assert!(log.contains(r#""path":"/assets/app.js""#));
        assert!(log.contains(r#""query":"v=3""#));
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""body_bytes":2048"#));
    }

    #[test]
    fn test_format_json_null_fields() {
        let entry = AccessLogEntry::new(
            "10.0.0.1".to_string(),
            "HEAD".to_string(),
            "/".to_string(),
        );
        let log = entry.format("json");
        assert!(log.contains(r#""query":null"#));
        assert!(log.contains(r#""referer":null"#));
    }

    #[test]
    fn test_format_custom() {
        let entry = create_test_entry();
        let log = entry.format("$request_method $request_uri -> $status ($request_time s)");
        assert!(log.starts_with("GET /assets/app.js?v=3 -> 200"));
        // 420us rounds to 0.000s at 3 decimal places
        assert!(log.contains("(0.000 s)"));
    }
}
