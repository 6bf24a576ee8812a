//! Fixture server configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "0.0.0.0".into()
}

/// Default listening port.
const fn default_port() -> u16 {
    3000
}

fn default_static_root() -> String {
    ".".into()
}

fn default_index_html() -> String {
    "public/index.html".into()
}

fn default_dashboard_html() -> String {
    "dashboard.html".into()
}

fn default_test_html() -> String {
    "dashboard-test.html".into()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind. `0.0.0.0` listens on all interfaces.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory that HTML pages and unmatched paths resolve under.
    #[serde(default = "default_static_root")]
    pub static_root: String,

    /// Page served at `/` and `/ultimate`, relative to `static_root`.
    #[serde(default = "default_index_html")]
    pub index_html: String,

    /// Page served at `/dashboard`.
    #[serde(default = "default_dashboard_html")]
    pub dashboard_html: String,

    /// Page served at `/test`.
    #[serde(default = "default_test_html")]
    pub test_html: String,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty host or port 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "a fixed port is required (got 0)".into(),
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_root: default_static_root(),
            index_html: default_index_html(),
            dashboard_html: default_dashboard_html(),
            test_html: default_test_html(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.static_root, ".");
        assert_eq!(config.index_html, "public/index.html");
        assert_eq!(config.dashboard_html, "dashboard.html");
        assert_eq!(config.test_html, "dashboard-test.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn blank_host_is_rejected() {
        let config = ServerConfig {
            host: "  ".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.host"
        ));
    }
}
