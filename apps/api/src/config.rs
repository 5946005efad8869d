//! Runtime configuration read from the environment
//!
//! `.env` is honoured through `dotenv` in `main`; everything here only looks
//! at variables that are already set.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::teapot::validator::validate_new;
use crate::domain::teapot::{Capacity, Teapot, TeapotMapping};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Failed to read seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed file {path}: {message}")]
    InvalidSeeds { path: PathBuf, message: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Teapots installed on startup and by every reset
    pub seeds: Vec<Teapot>,
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup
    ///
    /// # Variables
    /// - `HOST` (default `0.0.0.0`), `PORT` (default `3000`)
    /// - `DATABASE_URL` (optional)
    /// - `DATABASE_MAX_CONNECTIONS` (default `5`)
    /// - `TEAPOT_SEEDS_FILE` (optional JSON array replacing the default seeds)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = parse_or("HOST", lookup("HOST"), DEFAULT_HOST)?;
        let port: u16 = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let database_max_connections: u32 = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let seeds = match lookup("TEAPOT_SEEDS_FILE") {
            Some(path) => load_seeds(PathBuf::from(path))?,
            None => default_seeds(),
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            seeds,
        })
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

/// The three teapots every fresh store starts with
pub fn default_seeds() -> Vec<Teapot> {
    vec![
        Teapot::new("mouse", "Mouse", "Tefal", Capacity::L0_3),
        Teapot::new("einstein", "Einstein", "Sony", Capacity::L3),
        Teapot::new("nemezis", "Nemezis", "Philips", Capacity::L10),
    ]
}

/// Loads seeds from a JSON array, applying the same rules as a create request
fn load_seeds(path: PathBuf) -> Result<Vec<Teapot>, ConfigError> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::SeedFile { path, source }),
    };

    parse_seeds(&raw).map_err(|message| ConfigError::InvalidSeeds { path, message })
}

fn parse_seeds(raw: &str) -> Result<Vec<Teapot>, String> {
    let mappings: Vec<TeapotMapping> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seeds: Vec<Teapot> = Vec::with_capacity(mappings.len());
    for (index, mapping) in mappings.iter().enumerate() {
        let teapot = validate_new(mapping).map_err(|e| format!("entry {}: {}", index, e))?;
        if seeds.iter().any(|s| s.id == teapot.id) {
            return Err(format!("entry {}: duplicate id {}", index, teapot.id));
        }
        seeds.push(teapot);
    }

    Ok(seeds)
}
