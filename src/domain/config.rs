//! Application settings read from the INI config.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::error::StockChartError;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";
pub const DEFAULT_CATALOG_PATH: &str = "stocks.csv";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;
pub const API_KEY_ENV: &str = "STOCKCHART_ALPHAVANTAGE_API_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub listen: SocketAddr,
    pub catalog_path: PathBuf,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl AppConfig {
    /// Reads settings, with the API key taken from the environment when set.
    pub fn from_port(config: &dyn ConfigPort) -> Result<Self, StockChartError> {
        Self::from_port_with_key(config, std::env::var(API_KEY_ENV).ok())
    }

    pub fn from_port_with_key(
        config: &dyn ConfigPort,
        env_key: Option<String>,
    ) -> Result<Self, StockChartError> {
        let listen_raw = config
            .get_string("web", "listen")
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen = listen_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| StockChartError::ConfigInvalid {
                section: "web".to_string(),
                key: "listen".to_string(),
                reason: format!("{listen_raw:?} is not a socket address: {e}"),
            })?;

        let catalog_path: PathBuf = config
            .get_string("catalog", "path")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
            .into();

        let base_url = config
            .get_string("alphavantage", "base_url")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StockChartError::ConfigInvalid {
                section: "alphavantage".to_string(),
                key: "base_url".to_string(),
                reason: "base_url must be an http(s) URL".to_string(),
            });
        }

        let api_key = match env_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => key.trim().to_string(),
            None => config.require_string("alphavantage", "api_key")?,
        };

        let timeout_secs = config
            .get_int("alphavantage", "timeout_secs")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs <= 0 {
            return Err(StockChartError::ConfigInvalid {
                section: "alphavantage".to_string(),
                key: "timeout_secs".to_string(),
                reason: "timeout_secs must be positive".to_string(),
            });
        }

        Ok(Self {
            listen,
            catalog_path,
            api: ApiConfig {
                base_url,
                api_key,
                timeout: Duration::from_secs(timeout_secs as u64),
            },
        })
    }
}
