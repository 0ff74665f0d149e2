use routing::{RouteError, RouteRevision};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "LEADERBOARD_HOST";
pub const PORT_VAR: &str = "LEADERBOARD_PORT";
pub const ROUTES_VAR: &str = "LEADERBOARD_ROUTES";

pub const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LEADERBOARD_HOST: '{0}' is not an IP address")]
    InvalidHost(String),

    #[error("LEADERBOARD_PORT: '{0}' is not a port number")]
    InvalidPort(String),

    #[error("LEADERBOARD_ROUTES: {0}")]
    InvalidRevision(#[from] RouteError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub revision: RouteRevision,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            revision: RouteRevision::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; unset or blank values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = ServerConfig::default();

        if let Some(host) = value(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }

        if let Some(port) = value(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(revision) = value(ROUTES_VAR) {
            config.revision = revision.parse()?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
