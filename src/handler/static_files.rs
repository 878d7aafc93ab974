//! Static file loading module
//!
//! Resolves request paths against the serving root and loads file
//! contents, with index file support and traversal protection.

use crate::http::mime;
use crate::logger;
use std::path::Path;
use tokio::fs;

/// Outcome of resolving a request path against the serving root
pub enum FileLookup {
    /// Servable file: content bytes plus Content-Type
    Found(Vec<u8>, &'static str),
    /// No file maps to the request path
    NotFound,
    /// A file maps to the path but could not be read
    ReadError(std::io::Error),
}

/// Resolve `request_path` below `root` and load the target file.
///
/// The path is percent-decoded, parent-directory segments are stripped,
/// and the canonicalized target must stay below the canonicalized root.
/// Directory paths (root `/`, trailing slash, or a path naming a
/// directory) resolve through `index_files` in order.
pub async fn load(root: &str, request_path: &str, index_files: &[String]) -> FileLookup {
    let decoded = urlencoding::decode(request_path)
        .map_or_else(|_| request_path.to_string(), |p| p.into_owned());

    // Remove leading slashes and parent-directory segments
    let clean_path = decoded.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(root).join(&clean_path);

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving root not found or inaccessible '{root}': {e}"
            ));
            return FileLookup::NotFound;
        }
    };

    // Directory paths resolve through the index files
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in index_files {
            let candidate = file_path.join(index_file);
            if candidate.is_file() {
                file_path = candidate;
                break;
            }
        }
    }

    // A missing file fails canonicalization, which is the common 404 case
    let Ok(file_canonical) = file_path.canonicalize() else {
        return FileLookup::NotFound;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            file_canonical.display()
        ));
        return FileLookup::NotFound;
    }

    // A directory without an index file has no servable content
    if file_canonical.is_dir() {
        return FileLookup::NotFound;
    }

    match fs::read(&file_canonical).await {
        Ok(content) => {
            let content_type =
                mime::from_extension(file_canonical.extension().and_then(|e| e.to_str()));
            FileLookup::Found(content, content_type)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileLookup::NotFound,
        Err(e) => FileLookup::ReadError(e),
    }
}
