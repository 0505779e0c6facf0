//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::network::NetworkConfig;

/// Address used when `BRT_ADDR` is not set.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BRT_ADDR {0:?}: expected host:port")]
    InvalidAddr(String),

    #[error("invalid BRT_DEFAULT_SEGMENT_MINUTES {0:?}: expected a positive number")]
    InvalidSegmentMinutes(String),
}

/// Configuration for the server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on (`BRT_ADDR`).
    pub addr: SocketAddr,

    /// Optional JSON seed file (`BRT_SEED`). The demo network is used when
    /// unset.
    pub seed_path: Option<PathBuf>,

    /// Network construction parameters (`BRT_DEFAULT_SEGMENT_MINUTES`).
    pub network: NetworkConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_str = lookup("BRT_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr_str.clone()))?;

        let seed_path = lookup("BRT_SEED")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let mut network = NetworkConfig::default();
        if let Some(raw) = lookup("BRT_DEFAULT_SEGMENT_MINUTES") {
            let minutes: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSegmentMinutes(raw.clone()))?;
            if !minutes.is_finite() || minutes <= 0.0 {
                return Err(ConfigError::InvalidSegmentMinutes(raw));
            }
            network.default_segment_minutes = minutes;
        }

        Ok(Self {
            addr,
            seed_path,
            network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(config.seed_path, None);
        assert_eq!(config.network, NetworkConfig::default());
    }

    #[test]
    fn custom_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BRT_ADDR", "0.0.0.0:8080"),
            ("BRT_SEED", "/etc/brt/network.json"),
            ("BRT_DEFAULT_SEGMENT_MINUTES", "2.5"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.seed_path, Some(PathBuf::from("/etc/brt/network.json")));
        assert_eq!(config.network.default_segment_minutes, 2.5);
    }

    #[test]
    fn blank_seed_is_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[("BRT_SEED", "  ")])).unwrap();
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn reject_bad_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BRT_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidAddr("localhost".into()));
    }

    #[test]
    fn reject_bad_minutes() {
        for raw in ["abc", "0", "-1", "NaN"] {
            let err = ServerConfig::from_lookup(lookup(&[("BRT_DEFAULT_SEGMENT_MINUTES", raw)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidSegmentMinutes(raw.into()));
        }
    }
}
