use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Runtime configuration, loaded once at startup. The confirmation
/// secret is handed to [`crate::confirm::CodeGenerator`] explicitly;
/// nothing reads it from the environment after boot.
pub struct Config {
    pub confirm_secret: String,
    pub base_url: String,
    pub email_from: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            confirm_secret: try_load("PIZZERIA_SECRET", "dev-secret-change-me"),
            base_url: try_load("PIZZERIA_BASE_URL", "http://localhost:8000"),
            email_from: try_load("PIZZERIA_EMAIL_FROM", "orders@pizzeria.local"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
