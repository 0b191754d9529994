/// Configuration management for the staffing service
///
/// Handles server binding and the location of the SQLite database file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the database file (default: "data")
    pub data_dir: String,
    /// Database file name inside `data_dir` (default: "staffing.db")
    pub file_name: String,
}

impl DatabaseConfig {
    /// Full path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.file_name)
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("STAFFING_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("STAFFING_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                data_dir: std::env::var("STAFFING_DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string()),
                file_name: std::env::var("STAFFING_DB_FILE")
                    .unwrap_or_else(|_| "staffing.db".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_joins_dir_and_file() {
        let database = DatabaseConfig {
            data_dir: "var/lib".to_string(),
            file_name: "team.db".to_string(),
        };

        assert_eq!(database.database_path(), PathBuf::from("var/lib").join("team.db"));
    }
}
