//! Data Transfer Objects
//!
//! Request and response types for the endpoints that are not plain
//! savings data.

use serde::{Deserialize, Serialize};

/// Query string of the dashboard and rows endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ScrollQuery {
    /// Scroll offset in pixels, kept as text so junk falls back to 0
    #[serde(default)]
    pub offset: Option<String>,
}

impl ScrollQuery {
    pub fn offset(&self) -> u64 {
        self.offset
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of savings entries served
    pub entries: usize,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_parsing() {
        let query = |s: Option<&str>| ScrollQuery {
            offset: s.map(str::to_string),
        };

        assert_eq!(query(None).offset(), 0);
        assert_eq!(query(Some("280")).offset(), 280);
        assert_eq!(query(Some("-5")).offset(), 0);
        assert_eq!(query(Some("abc")).offset(), 0);
        assert_eq!(query(Some("")).offset(), 0);
    }
}
