use std::{env, path::PathBuf};

use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must be a valid number: {1}")]
    Invalid(&'static str, std::num::ParseIntError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl Config {
    /// Reads the process environment once at startup. A missing
    /// `DATABASE_URL` is a startup failure, not something to limp past.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::Invalid("PORT", e))?,
            Err(_) => DEFAULT_PORT,
        };
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));
        Ok(Self {
            database_url,
            port,
            upload_dir,
        })
    }
}
