use anyhow::{Context, Result};
use std::env;

/// Environment configuration, read once at startup.
pub struct Config {
    pub port: u16,
    /// Origins allowed for cross-origin requests. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", value))?,
            Err(_) => 5000,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            allowed_origins,
        })
    }
}
