//! Quiz configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::Locale;

/// Settings for the quiz provider and its messages.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Gemini model name.
    #[serde(default = "default_model")]
    model: String,

    /// Base URL of the generative-language REST API.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    api_key_env: String,

    /// Number of word/definition pairs requested per quiz.
    #[serde(default = "default_question_count")]
    question_count: usize,

    /// Language of the prompt and of every message.
    #[serde(default)]
    locale: Locale,

    /// Replaces the locale's default instruction when set.
    #[serde(default)]
    prompt: Option<String>,
}

#[instrument]
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[instrument]
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[instrument]
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

#[instrument]
fn default_question_count() -> usize {
    10
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            question_count: default_question_count(),
            locale: Locale::default(),
            prompt: None,
        }
    }
}

impl QuizConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.question_count == 0 {
            return Err(ConfigError::new("question_count must be at least 1"));
        }

        info!(model = %config.model, locale = %config.locale, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Instruction sent to the model.
    #[instrument(skip(self))]
    pub fn effective_prompt(&self) -> String {
        match &self.prompt {
            Some(prompt) => prompt.clone(),
            None => self.locale.default_prompt(self.question_count),
        }
    }

    /// Returns a copy with a different locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns a copy pointing at a different API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns a copy reading the credential from a different variable.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
