//! Configuration management for the showcase service
//!
//! Handles server binding, the project database location, and the default
//! log filter. Every value can be overridden through `SHOWCASE_*` env vars.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// SQLite database holding project records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file (default: "data/showcase.db")
    /// Parent directories are created on connect.
    pub path: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set (e.g., "info", "showcase=debug")
    pub filter: String,
}

impl Config {
    /// `host:port` string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("SHOWCASE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SHOWCASE_PORT")
                    .unwrap_or_else(|_| "3004".to_string())
                    .parse()
                    .unwrap_or(3004),
            },
            database: DatabaseConfig {
                path: std::env::var("SHOWCASE_DATABASE_PATH")
                    .unwrap_or_else(|_| "data/showcase.db".to_string()),
                max_connections: std::env::var("SHOWCASE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            logging: LoggingConfig {
                filter: std::env::var("SHOWCASE_LOG").unwrap_or_else(|_| "info".to_string()),
            },
        }
    }
}
