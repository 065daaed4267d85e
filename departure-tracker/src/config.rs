use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Host of the status-update listener
    #[serde(default = "default_listener_host")]
    pub listener_host: String,

    /// Port of the status-update listener
    #[serde(default = "default_listener_port")]
    pub listener_port: u16,

    /// Connect timeout for status-update requests (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listener_host() -> String {
    "127.0.0.1".to_string()
}

fn default_listener_port() -> u16 {
    5000
}

fn default_connect_timeout_secs() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            listener_host: default_listener_host(),
            listener_port: default_listener_port(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl TrackerConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: TrackerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.listener_host, self.listener_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_listener_constants() {
        let config = TrackerConfig::default();
        assert_eq!(config.listener_address(), "127.0.0.1:5000");
        assert_eq!(config.connect_timeout_secs, 2);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: TrackerConfig = toml::from_str("listener_port = 8080\n").unwrap();
        assert_eq!(config.listener_host, "127.0.0.1");
        assert_eq!(config.listener_port, 8080);
        assert_eq!(config.connect_timeout_secs, 2);
    }

    #[test]
    fn test_empty_toml_is_fully_defaulted() {
        let config: TrackerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener_address(), "127.0.0.1:5000");
    }
}
