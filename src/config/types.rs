use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// HTML page served on `GET /`, read from disk on every request.
    #[serde(default = "default_index_template")]
    pub index_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Usually supplied through `GEMINI_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: String,
    /// When false a missing key only logs a warning at startup.
    #[serde(default = "default_true")]
    pub require_api_key: bool,
    /// Diagnostic mode: return raw provider errors instead of the apology.
    #[serde(default)]
    pub expose_provider_errors: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_apology")]
    pub apology: String,
    #[serde(default)]
    pub models: ModelTiers,
}

/// Model identifiers per capability tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTiers {
    #[serde(default = "default_base_model")]
    pub base: String,
    #[serde(default = "default_pro_model")]
    pub pro: String,
    #[serde(default = "default_fast_model")]
    pub fast: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Base,
    Pro,
    Fast,
}

impl ModelTiers {
    pub fn resolve(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Base => &self.base,
            ModelTier::Pro => &self.pro,
            ModelTier::Fast => &self.fast,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            index_template: default_index_template(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            require_api_key: true,
            expose_provider_errors: false,
            timeout_secs: default_timeout_secs(),
            apology: default_apology(),
            models: ModelTiers::default(),
        }
    }
}

impl Default for ModelTiers {
    fn default() -> Self {
        Self {
            base: default_base_model(),
            pro: default_pro_model(),
            fast: default_fast_model(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_index_template() -> String {
    "templates/index.html".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_apology() -> String {
    "Sorry, something went wrong while generating a response. Please try again later.".to_string()
}

fn default_base_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_pro_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_fast_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}
