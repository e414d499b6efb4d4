mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::{debug, warn};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides. Call `dotenv` before this so `.env` values count.
pub async fn load() -> Result<Config> {
    let (config_path, explicit) = match env::var("CONFIG_PATH") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let config = load_from(&config_path, explicit).await?;
    Ok(config.with_api_key(env::var(API_KEY_VAR).ok()))
}

/// Reads a YAML file. A missing file is only an error when `required` is set;
/// otherwise every setting takes its default.
pub async fn load_from(path: impl AsRef<Path>, required: bool) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => parse(&config_str),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            debug!("No configuration file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    /// Overrides the file's API key with a non-blank value from the environment.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.llm.api_key = key;
        }
        self
    }

    /// Startup checks. A missing API key is fatal unless `require_api_key` is off.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            if self.llm.require_api_key {
                return Err(Error::config(format!(
                    "{API_KEY_VAR} is not set and llm.api_key is empty"
                )));
            }
            warn!("{} not set. API calls may fail.", API_KEY_VAR);
        }

        for (tier, model) in [
            ("base", &self.llm.models.base),
            ("pro", &self.llm.models.pro),
            ("fast", &self.llm.models.fast),
        ] {
            if model.trim().is_empty() {
                return Err(Error::config(format!("llm.models.{tier} must not be empty")));
            }
        }

        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be positive"));
        }

        Ok(())
    }
}
