//! Environment-driven configuration.

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Maximum pool connections.
    pub max_connections: u32,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to local
    /// development defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/camp_signups".into());
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| AppError::Config(format!("invalid PORT: {}", v)))?,
            Err(_) => 3000,
        };
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| AppError::Config(format!("invalid MAX_CONNECTIONS: {}", v)))?,
            Err(_) => 5,
        };

        let config = AppConfig {
            database_url,
            host,
            port,
            max_connections,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.database_url.is_empty() {
            return Err(AppError::Config("DATABASE_URL must be set".into()));
        }
        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err(AppError::Config(
                "DATABASE_URL must be a postgres:// URL".into(),
            ));
        }
        if self.max_connections == 0 {
            return Err(AppError::Config("MAX_CONNECTIONS must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: "postgres://localhost/camp_signups".into(),
            host: "127.0.0.1".into(),
            port: 3000,
            max_connections: 5,
        }
    }
}
