//! Configuration management for the GPlus assistant
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (GPLUS_ASSISTANT__ prefix)
//!
//! # Knowledge base
//!
//! The catalog the assistant answers from (models, accessories, FAQs,
//! company info, quick-reply groups) is loaded separately from a YAML or
//! JSON file, falling back to the built-in catalog.

pub mod catalog;
pub mod knowledge;
pub mod settings;

pub use knowledge::{KnowledgeBase, KnowledgeBaseManager};
pub use settings::{
    load_settings, AssistantConfig, ObservabilityConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
