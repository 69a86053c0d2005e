// Configuration management with layered configuration (file, env)

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure containing all configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Whether to create the database file if it does not exist.
    /// Off by default: a missing store is a deployment error and should
    /// fail fast at startup.
    #[serde(default)]
    pub create_if_missing: bool,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Settings {
    /// Load configuration with layered precedence: defaults → file → env
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add local configuration (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment-specific configuration
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        // Validate database config
        if self.database.path.is_empty() {
            return Err("Database path cannot be empty".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.database.min_connections > self.database.max_connections {
            return Err("Database min_connections cannot exceed max_connections".to_string());
        }

        // Validate observability config
        if self.observability.log_level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "qboard.db".to_string(),
                create_if_missing: false,
                // The board is written for a single shared connection; raise
                // this only with an external serialization discipline.
                max_connections: 1,
                min_connections: 1,
                connect_timeout_seconds: 5,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_catches_empty_database_path() {
        let mut settings = Settings::default();
        settings.database.path = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_catches_zero_max_connections() {
        let mut settings = Settings::default();
        settings.database.max_connections = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_catches_min_above_max_connections() {
        let mut settings = Settings::default();
        settings.database.min_connections = 8;
        settings.database.max_connections = 2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_toml = r#"
[database]
path = "/var/lib/qboard/board.db"
max_connections = 1
min_connections = 1
connect_timeout_seconds = 10

[observability]
log_level = "debug"
"#;
        std::fs::write(temp_dir.path().join("default.toml"), config_toml).unwrap();

        let settings = Settings::load_from_path(temp_dir.path()).unwrap();
        assert_eq!(settings.database.path, "/var/lib/qboard/board.db");
        assert!(!settings.database.create_if_missing);
        assert_eq!(settings.observability.log_level, "debug");
        assert!(settings.validate().is_ok());
    }
}
