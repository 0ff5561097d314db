//! Configuration management for the books server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BooksConfig {
    /// Route prefix the book endpoints are mounted under
    pub path: String,
    /// Per-request handling deadline, in seconds
    pub handler_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub books: BooksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("books.path", "/books")?
            .set_default("books.handler_timeout", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKS_SERVER__PORT, BOOKS_BOOKS__HANDLER_TIMEOUT, ...
            .add_source(
                Environment::with_prefix("BOOKS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("books.path", env::var("BOOKS_PATH").ok())?
            .set_override_option("books.handler_timeout", env::var("HANDLER_TIMEOUT").ok())?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.books.handler_timeout == 0 {
            return Err(ConfigError::Message(
                "books.handler_timeout must be at least 1 second".to_string(),
            ));
        }
        if !self.books.path.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "books.path must start with '/', got {:?}",
                self.books.path
            )));
        }
        Ok(())
    }
}

impl BooksConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.handler_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            path: "/books".to_string(),
            handler_timeout: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
