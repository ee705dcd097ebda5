//! Application State
//!
//! Shared state accessible by all API handlers.
//! The dataset is transformed once at startup and shared read-only.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::api::error::ApiResult;
use crate::config::{normalize_base_path, ServerConfig};
use crate::render::FixedSizeList;
use crate::savings::{resolve_entries, SavingsEntry, SavingsSummary};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Table view, chart series and total of the dataset
    pub summary: Arc<SavingsSummary>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from an in-memory dataset
    pub fn new(entries: &[SavingsEntry], config: ApiConfig) -> Self {
        Self {
            summary: Arc::new(SavingsSummary::from_entries(entries)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create state from the data file, or the built-in dataset when none is given
    pub fn load(data_file: Option<&Path>, config: ApiConfig) -> ApiResult<Self> {
        let entries = resolve_entries(data_file)?;
        tracing::info!(
            entries = entries.len(),
            source = %data_file
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()),
            "Savings dataset ready"
        );
        Ok(Self::new(&entries, config))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// URL the dashboard script fetches row windows from
    pub fn rows_url(&self) -> String {
        format!("{}/rows", self.config.base_path)
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Normalized path prefix, empty for root
    pub base_path: String,
    /// Table geometry
    pub list: FixedSizeList,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_path: String::new(),
            list: FixedSizeList::default(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Builder method: mount everything under `base_path`
    pub fn base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        ApiConfig::new(server.host.clone(), server.port).base_path(&server.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_from_server_config() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            base_path: "doge-dashboard".to_string(),
        };
        let config = ApiConfig::from(&server);
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.base_path, "/doge-dashboard");
    }

    #[test]
    fn test_rows_url() {
        let state = AppState::new(&[], ApiConfig::default());
        assert_eq!(state.rows_url(), "/rows");

        let state = AppState::new(&[], ApiConfig::default().base_path("/dash"));
        assert_eq!(state.rows_url(), "/dash/rows");
    }

    #[test]
    fn test_load_builtin() {
        let state = AppState::load(None, ApiConfig::default()).unwrap();
        assert_eq!(state.summary.entries.len(), 13);
    }
}
