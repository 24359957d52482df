//! Service Configuration
//!
//! Command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Route service for the PackPal tracking page
#[derive(Parser, Clone)]
#[command(name = "route-service", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ROUTE_SERVICE_ADDR", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// TomTom API key
    #[arg(long, env = "TOMTOM_API_KEY", hide_env_values = true)]
    pub tomtom_api_key: String,

    /// Base URL of the TomTom-compatible API
    #[arg(long, env = "TOMTOM_BASE_URL", default_value = "https://api.tomtom.com")]
    pub tomtom_base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "ROUTE_SERVICE_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Directory for the rolling log file
    #[arg(long, env = "ROUTE_SERVICE_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Lines kept in the rolling log file
    #[arg(long, default_value_t = rolling_logger::DEFAULT_MAX_LINES)]
    pub log_max_lines: usize,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["route-service", "--tomtom-api-key", "k"]).unwrap();
        assert_eq!(config.listen, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.tomtom_base_url, "https://api.tomtom.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_max_lines, rolling_logger::DEFAULT_MAX_LINES);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "route-service",
            "--tomtom-api-key", "k",
            "--listen", "0.0.0.0:8080",
            "--request-timeout-secs", "3",
            "--log-dir", "/tmp/packpal",
        ])
        .unwrap();
        assert_eq!(config.listen.port(), 8080);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/packpal"));
    }
}
