//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `MONGODB_URL` (or `DATABASE_URL`) - MongoDB connection string
//!
//! ## Optional Variables
//!
//! - `DB_NAME` - Database name (default: `studentsdb`)
//! - `PORT` - Listening port (default: `3000`)
//! - `STORAGE_BINDING` - `collection` (raw driver) or `model`
//!   (schema-mapped), default: `collection`
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result, bail};
use std::env;
use std::fmt;

/// Which storage adapter the service runs against.
///
/// Both adapters implement the same capability set; the choice is made once
/// here and never revisited per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBinding {
    /// Raw driver collection, no schema enforcement.
    Collection,
    /// Schema-mapped model with write validation.
    Model,
}

impl StorageBinding {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "collection" => Ok(Self::Collection),
            "model" => Ok(Self::Model),
            other => bail!("STORAGE_BINDING must be 'collection' or 'model', got '{other}'"),
        }
    }
}

impl fmt::Display for StorageBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => write!(f, "collection"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub db_name: String,
    pub listen_addr: String,
    pub storage_binding: StorageBinding,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is missing or the storage
    /// binding name is unknown.
    pub fn from_env() -> Result<Self> {
        let mongodb_url = Self::load_mongodb_url().context("Failed to load database configuration")?;

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "studentsdb".to_string());

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        let listen_addr = format!("0.0.0.0:{port}");

        let storage_binding = match env::var("STORAGE_BINDING") {
            Ok(value) => StorageBinding::parse(&value)?,
            Err(_) => StorageBinding::Collection,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            mongodb_url,
            db_name,
            listen_addr,
            storage_binding,
            log_level,
            log_format,
        })
    }

    /// Loads the MongoDB connection string.
    ///
    /// Priority:
    /// 1. `MONGODB_URL` environment variable
    /// 2. `DATABASE_URL` environment variable
    fn load_mongodb_url() -> Result<String> {
        if let Ok(url) = env::var("MONGODB_URL") {
            return Ok(url);
        }

        env::var("DATABASE_URL").context("MONGODB_URL or DATABASE_URL must be set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_binding() {
        assert_eq!(
            StorageBinding::parse("collection").unwrap(),
            StorageBinding::Collection
        );
    }

    #[test]
    fn test_parse_model_binding_case_insensitive() {
        assert_eq!(
            StorageBinding::parse("Model").unwrap(),
            StorageBinding::Model
        );
    }

    #[test]
    fn test_parse_unknown_binding_fails() {
        assert!(StorageBinding::parse("duck-typed").is_err());
    }
}
