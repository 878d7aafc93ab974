//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! file-serving business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_500_response};
