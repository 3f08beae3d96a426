//! Process configuration.
//!
//! Defaults match the historical hard-coded values (`0.0.0.0:5000`,
//! `pharmacy_inventory.db`); environment variables override them.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATABASE_PATH: &str = "pharmacy_inventory.db";

pub const LISTEN_ADDR_VAR: &str = "PHARMACY_LISTEN_ADDR";
pub const DATABASE_PATH_VAR: &str = "PHARMACY_DATABASE_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_path: PathBuf,
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first
    /// if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let database_path = match lookup(DATABASE_PATH_VAR) {
            Some(p) if p.trim().is_empty() => return Err(ConfigError::Empty(DATABASE_PATH_VAR)),
            Some(p) => PathBuf::from(p),
            None => PathBuf::from(DEFAULT_DATABASE_PATH),
        };

        Ok(Self {
            listen_addr,
            database_path,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}
