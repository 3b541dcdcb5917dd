use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml` if present, then apply
    /// environment overrides.
    pub fn new() -> Self {
        let mut config = Config::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            match std::fs::read_to_string(CONFIG_FILE_PATH) {
                Ok(content) => match toml::from_str::<Config>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => log::warn!("Failed to parse {CONFIG_FILE_PATH}: {err}"),
                },
                Err(err) => log::warn!("Failed to read {CONFIG_FILE_PATH}: {err}"),
            }
        }

        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            if !api_key.trim().is_empty() {
                config.api_key = Some(api_key);
            }
        }
        if let Ok(api_base) = std::env::var("GROQ_API_BASE") {
            if !api_base.trim().is_empty() {
                config.api_base = api_base;
            }
        }
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(timeout) = std::env::var("GROQ_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.timeout_secs > 0);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("api_key = \"gsk_test\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn full_toml_overrides_everything() {
        let content = r#"
            api_key = "gsk_test"
            api_base = "http://localhost:9999/v1"
            model = "llama-3.1-8b-instant"
            timeout_secs = 5
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.api_base, "http://localhost:9999/v1");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout_secs, 5);
    }
}
