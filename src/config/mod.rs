//! Configuration module for the homepage content backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Where the content envelope is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    /// Process-local; content is lost on restart
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(StorageBackend::Sqlite),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key guarding the admin routes
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    pub storage: StorageBackend,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("CONTENT_API_PSK")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let db_path = env::var("CONTENT_DB_PATH")
            .unwrap_or_else(|_| "./data/content.sqlite".to_string())
            .into();

        let storage_raw = env::var("CONTENT_STORAGE").unwrap_or_else(|_| "sqlite".to_string());
        let storage = StorageBackend::from_str(&storage_raw)
            .ok_or_else(|| format!("Invalid CONTENT_STORAGE value: {}", storage_raw))?;

        let bind_raw =
            env::var("CONTENT_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|e| format!("Invalid CONTENT_BIND_ADDR {}: {}", bind_raw, e))?;

        let log_level = env::var("CONTENT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api_psk,
            db_path,
            storage,
            bind_addr,
            log_level,
        })
    }
}
