//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use tb_core::TablebaseVariant;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Directories containing Syzygy tables
    pub syzygy_paths: Vec<PathBuf>,

    /// Rule set of the served tables
    pub variant: TablebaseVariant,

    /// Send `Access-Control-Allow-Origin: *`
    pub cors: bool,

    /// Log every probed position
    pub verbose: bool,

    /// Largest piece count to probe DTM for, `None` without DTM tables
    pub dtm_max_pieces: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let syzygy_paths: Vec<PathBuf> = env::var_os("SYZYGY_PATH")
            .map(|paths| env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        if syzygy_paths.is_empty() {
            return Err(ConfigError::MissingSyzygyPath);
        }

        let port = match env::var("PORT") {
            Ok(v) => parse_port(&v)?,
            Err(_) => 5000,
        };

        let variant = match env::var("TABLEBASE_VARIANT") {
            Ok(v) => v.parse()?,
            Err(_) => TablebaseVariant::default(),
        };

        let dtm_max_pieces = match env::var("DTM_MAX_PIECES") {
            Ok(v) => Some(parse_pieces(&v)?),
            Err(_) => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            syzygy_paths,
            variant,
            cors: env::var("CORS").map(|v| parse_flag(&v)).unwrap_or(false),
            verbose: env::var("VERBOSE").map(|v| parse_flag(&v)).unwrap_or(false),
            dtm_max_pieces,
        })
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_string())),
    }
}

fn parse_pieces(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(pieces) if (3..=32).contains(&pieces) => Ok(pieces),
        _ => Err(ConfigError::InvalidDtmPieces(value.to_string())),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
