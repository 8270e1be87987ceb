use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::api::SecurityConfig;

/// Server configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub security: SecurityConfig,
    /// Fixed seed for resource/tip sampling and quote selection.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        let security = SecurityConfig::from_env();
        match security.api_key.as_deref() {
            None => warn!("No API key configured; roadmap creation and updates are open to anyone"),
            Some("") => warn!("API key is set but empty; roadmap creation and updates are refused"),
            Some(_) => {}
        }

        Self {
            security,
            seed: try_load("ROADMAPPER_SEED"),
        }
    }
}

fn try_load<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let value = env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => {
            info!("{key} set to {value}");
            Some(parsed)
        }
        Err(e) => {
            warn!("Ignoring invalid {key} value {value:?}: {e}");
            None
        }
    }
}
