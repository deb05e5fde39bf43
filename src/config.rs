//! Configuration types.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening port.
    pub port: u16,
}

impl ServerConfig {
    /// Load from the environment. Only `PORT` is read.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Build from a raw `PORT` value. Unset or blank means the default.
    pub fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("{:?} is not a valid port ({})", value, e),
            })?,
        };
        Ok(Self { port })
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(ServerConfig::from_port_var(None).unwrap().port, DEFAULT_PORT);
        assert_eq!(ServerConfig::from_port_var(Some("  ")).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn reads_port() {
        let config = ServerConfig::from_port_var(Some("8080")).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn rejects_garbage() {
        let err = ServerConfig::from_port_var(Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
        assert!(ServerConfig::from_port_var(Some("70000")).is_err());
    }
}
