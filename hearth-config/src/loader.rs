use std::env;

use thiserror::Error;
use url::Url;

use crate::models::{Config, CorsConfig, DatabaseConfig, ServerConfig};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("DATABASE_URL is required")]
    MissingDatabaseUrl,

    #[error("invalid database URL: {source}")]
    InvalidDatabaseUrl {
        #[from]
        source: url::ParseError,
    },

    #[error("database URL must use a postgres scheme, got {scheme}")]
    UnsupportedDatabaseScheme { scheme: String },

    #[error("invalid value {value:?} for {name}")]
    InvalidEnvValue { name: &'static str, value: String },
}

/// Environment-first configuration loader.
///
/// Callers decide whether a `.env` file is consulted (the server binary
/// runs `dotenvy::dotenv()` before loading); the loader itself only reads
/// the process environment.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn from_env() -> Result<Config, ConfigLoadError> {
        let host = env_string("HEARTH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_port("HEARTH_PORT", env_string("HEARTH_PORT"))?;
        let database_url = resolve_database_url(env_string("DATABASE_URL"))?;
        let max_connections = parse_u32(
            "HEARTH_DB_MAX_CONNECTIONS",
            env_string("HEARTH_DB_MAX_CONNECTIONS"),
            DEFAULT_DB_MAX_CONNECTIONS,
        )?;
        let allowed_origins = split_origins(env_string("HEARTH_CORS_ALLOWED_ORIGINS"));

        Ok(Config {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            cors: CorsConfig { allowed_origins },
        })
    }
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Validates that the configured URL parses and targets PostgreSQL.
pub fn resolve_database_url(raw: Option<String>) -> Result<String, ConfigLoadError> {
    let raw = raw.ok_or(ConfigLoadError::MissingDatabaseUrl)?;
    let parsed = Url::parse(raw.trim())?;
    match parsed.scheme() {
        "postgres" | "postgresql" => Ok(parsed.to_string()),
        other => Err(ConfigLoadError::UnsupportedDatabaseScheme {
            scheme: other.to_string(),
        }),
    }
}

pub fn parse_port(name: &'static str, raw: Option<String>) -> Result<u16, ConfigLoadError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigLoadError::InvalidEnvValue { name, value }),
    }
}

pub fn parse_u32(
    name: &'static str,
    raw: Option<String>,
    default: u32,
) -> Result<u32, ConfigLoadError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigLoadError::InvalidEnvValue { name, value }),
    }
}

/// Splits a comma-separated origin list; absent means "any origin".
pub fn split_origins(raw: Option<String>) -> Vec<String> {
    match raw {
        None => vec!["*".to_string()],
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}
