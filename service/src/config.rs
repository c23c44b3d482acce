use std::env;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the event endpoint listens on
    pub port: u16,
    /// Shared secret for verifying event signatures (HMAC-SHA256)
    pub event_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            port,
            event_secret: lookup("EVENT_SECRET").filter(|s| !s.is_empty()),
        })
    }
}
