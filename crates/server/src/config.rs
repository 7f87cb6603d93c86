use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use thiserror::Error;

/// Environment variable overriding [`ServerConfig::host`].
pub const HOST_VAR: &str = "CRAMER_HOST";

/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_VAR: &str = "CRAMER_PORT";

/// Errors that can occur when building or validating a [`ServerConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid route {route:?}: {reason}")]
    InvalidRoute { route: String, reason: &'static str },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Configuration for the solver endpoint.
///
/// Built once at startup and handed to [`Server::new`](crate::Server::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Single path segment the solver is served under.
    pub route: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            route: "solve".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Builds the default config with overrides from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the default config with overrides from `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidEnv {
                var: HOST_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.parse::<u16>().map_err(|_| ConfigError::InvalidEnv {
                var: PORT_VAR,
                value,
            })?;
        }

        Ok(config)
    }

    /// Validates that the route is a single, non-empty path segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is empty or contains a `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.route.is_empty() {
            return Err(ConfigError::InvalidRoute {
                route: self.route.clone(),
                reason: "route must not be empty",
            });
        }
        if self.route.contains('/') {
            return Err(ConfigError::InvalidRoute {
                route: self.route.clone(),
                reason: "route must be a single path segment",
            });
        }
        Ok(())
    }

    /// Returns the address the server listens on.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
