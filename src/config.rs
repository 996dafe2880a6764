use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Interface the HTTP server binds to
    /// Default: 127.0.0.1
    pub host: String,

    /// Default: 8080
    pub port: u16,

    /// Maximum payload size for all requests (in bytes)
    /// Default: 1MB (1024 * 1024)
    pub max_payload_size: usize,

    /// Directory for the daily rotating log files
    /// Default: logs
    pub log_dir: PathBuf,

    /// Optional JSON file replacing the built-in sample postings
    pub jobs_seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_payload_size: 1024 * 1024,
            log_dir: PathBuf::from("logs"),
            jobs_seed_path: None,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        _ => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST: bind address (default: 127.0.0.1)
    /// - PORT: bind port (default: 8080)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 1048576 = 1MB)
    /// - LOG_DIR: log directory (default: logs)
    /// - JOBS_SEED_PATH: JSON array of postings to serve instead of the samples
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            max_payload_size: parse_var("MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
            log_dir: env::var_os("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            jobs_seed_path: env::var_os("JOBS_SEED_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}
