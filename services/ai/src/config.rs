use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_SERVICE_TITLE: &str = "Today AI Service";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AI_SERVICE_HOST must be a valid IP address, got {0:?}")]
    InvalidHost(String),
    #[error("AI_SERVICE_PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub service_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            service_title: DEFAULT_SERVICE_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_raw = lookup("AI_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match lookup("AI_SERVICE_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let service_title =
            lookup("AI_SERVICE_TITLE").unwrap_or_else(|| DEFAULT_SERVICE_TITLE.to_string());

        Ok(Self {
            host,
            port,
            service_title,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
