use std::str::FromStr;

use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Shared secret for verifying session tokens issued by the identity
    /// provider.
    pub session_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .map(Environment::try_from)
                .transpose()
                .map_err(|e| SettingsError::InvalidVar("APP_ENV", e))?
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: parse_env_or("SERVER_PORT", 3000)?,
            },
            database: DatabaseSettings {
                url: require_env("DATABASE_URL")?,
                max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            auth: AuthSettings {
                session_secret: require_env("SESSION_JWT_SECRET")?,
            },
            generation: GenerationSettings {
                api_key: require_env("GOOGLE_AI_API_KEY")?,
                base_url: env_or(
                    "GENERATION_BASE_URL",
                    crate::infrastructure::llm::GEMINI_DEFAULT_BASE_URL,
                ),
            },
            logging: LoggingSettings {
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

fn require_env(name: &'static str) -> Result<String, SettingsError> {
    std::env::var(name).map_err(|_| SettingsError::MissingVar(name))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T>(name: &'static str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| SettingsError::InvalidVar(name, raw)),
        Err(_) => Ok(default),
    }
}
