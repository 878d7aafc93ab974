//! Content-Type lookup
//!
//! Maps a file extension to the MIME type used for the response
//! Content-Type header. Covers the asset types a typical frontend build
//! output contains; everything else falls back to a binary type.

/// Look up the Content-Type for a file extension
///
/// # Examples
/// ```
/// use distserve::http::mime::from_extension;
/// assert_eq!(from_extension(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(from_extension(Some("wasm")), "application/wasm");
/// assert_eq!(from_extension(None), "application/octet-stream");
/// ```
pub fn from_extension(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and styles
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        // Media
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents and archives
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_output_types() {
        assert_eq!(from_extension(Some("html")), "text/html; charset=utf-8");
        assert_eq!(from_extension(Some("js")), "application/javascript");
        assert_eq!(from_extension(Some("map")), "application/json");
        assert_eq!(from_extension(Some("css")), "text/css");
        assert_eq!(from_extension(Some("svg")), "image/svg+xml");
        assert_eq!(from_extension(Some("woff2")), "font/woff2");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(from_extension(Some("xyz")), "application/octet-stream");
        assert_eq!(from_extension(None), "application/octet-stream");
    }
}
