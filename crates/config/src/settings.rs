//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upper bound for the simulated typing delay
const MAX_TYPING_DELAY_MS: u64 = 10_000;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Missing knowledge-base file falls back to the built-in catalog
    #[default]
    Development,
    /// Missing knowledge-base file is an error
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Assistant behaviour
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Assistant behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Simulated "bot is typing" delay before a reply is appended
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Path to the knowledge-base file (YAML or JSON)
    #[serde(default = "default_knowledge_base_path")]
    pub knowledge_base_path: String,
}

fn default_typing_delay_ms() -> u64 {
    800
}

fn default_knowledge_base_path() -> String {
    "config/knowledge_base.yaml".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            knowledge_base_path: default_knowledge_base_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default filter level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assistant.typing_delay_ms > MAX_TYPING_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "assistant.typing_delay_ms".to_string(),
                message: format!(
                    "Typing delay too high (maximum {}ms), got {}",
                    MAX_TYPING_DELAY_MS, self.assistant.typing_delay_ms
                ),
            });
        }

        if self.assistant.knowledge_base_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assistant.knowledge_base_path".to_string(),
                message: "Path cannot be empty".to_string(),
            });
        }

        let level = self.observability.log_level.to_ascii_lowercase();
        if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("Unknown log level '{}'", self.observability.log_level),
            });
        }

        Ok(())
    }

    /// Typing delay as a duration
    pub fn typing_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.assistant.typing_delay_ms)
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("GPLUS_ASSISTANT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.assistant.typing_delay_ms, 800);
        assert_eq!(settings.typing_delay(), std::time::Duration::from_millis(800));
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.assistant.typing_delay_ms = 60_000;
        assert!(settings.validate().is_err());

        settings.assistant.typing_delay_ms = 0;
        assert!(settings.validate().is_ok());

        settings.observability.log_level = "loud".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "observability.log_level"
        ));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str(
            "environment: production\nassistant:\n  typing_delay_ms: 250\n",
        )
        .unwrap();
        assert!(settings.environment.is_production());
        assert_eq!(settings.assistant.typing_delay_ms, 250);
        assert_eq!(settings.assistant.knowledge_base_path, "config/knowledge_base.yaml");
        assert_eq!(settings.observability.log_level, "info");
    }
}
