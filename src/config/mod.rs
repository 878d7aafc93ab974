// Configuration module entry point
// Builds the immutable configuration the server is started with

mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

pub use types::{Config, LoggingConfig, ServerConfig, ServingConfig};

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Built-in defaults serve `dist` on port 3000 across all interfaces.
    /// An optional `distserve.toml` next to the working directory and
    /// `DISTSERVE`-prefixed environment variables may override them.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("distserve")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DISTSERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("serving.root", "dist")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }

    /// Socket address the listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Serving root as an absolute path, for the startup banner.
    ///
    /// Joins the working directory rather than canonicalizing, so the
    /// banner also prints when the root does not exist yet.
    pub fn root_display_path(&self) -> PathBuf {
        std::env::current_dir().map_or_else(
            |_| PathBuf::from(&self.serving.root),
            |cwd| cwd.join(&self.serving.root),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_dist_on_port_3000() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.serving.root, "dist");
        assert_eq!(cfg.serving.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn root_display_path_is_absolute() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let path = cfg.root_display_path();
        assert!(path.is_absolute());
        assert!(path.ends_with("dist"));
    }
}
