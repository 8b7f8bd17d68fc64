// Proxy server and upstream endpoint configuration

use crate::error::{Result, ValueBidError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SHOPPING_URL: &str = "https://openapi.naver.com/v1/search/shop.json";
pub const DEFAULT_VIDEO_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Listener and outbound client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ValueBidError::Config("Server host is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ValueBidError::Config(
                "Upstream timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// Base URLs of the third-party search APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Full URL of the shopping search endpoint
    pub shopping_url: String,
    /// Base URL of the video API; `/search` and `/videos` are appended
    pub video_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            shopping_url: DEFAULT_SHOPPING_URL.to_string(),
            video_url: DEFAULT_VIDEO_URL.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("shopping_url", &self.shopping_url), ("video_url", &self.video_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValueBidError::Config(format!(
                    "Invalid upstream {}: {}",
                    name, url
                )));
            }
        }
        Ok(())
    }

    pub fn video_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.video_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ServerConfig::default().validate().is_ok());
        assert!(UpstreamConfig::default().validate().is_ok());
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:8787");
    }

    #[test]
    fn test_rejects_bad_values() {
        let server = ServerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(server.validate().is_err());

        let upstream = UpstreamConfig {
            video_url: "ftp://videos".to_string(),
            ..Default::default()
        };
        assert!(upstream.validate().is_err());
    }

    #[test]
    fn test_video_endpoint_joins_path() {
        let upstream = UpstreamConfig {
            video_url: "http://127.0.0.1:9000/v3/".to_string(),
            ..Default::default()
        };
        assert_eq!(upstream.video_endpoint("search"), "http://127.0.0.1:9000/v3/search");
    }
}
