//! Gemini `generateContent` client producing quiz questions.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, error, info, instrument, warn};

use super::{QuizSource, extract_generated_text, parse_questions};
use crate::{QuizConfig, QuizError, QuizQuestion};

/// Quiz source backed by the Gemini generative-language API.
///
/// The credential is read from the environment on every fetch, so a key
/// exported after startup is picked up by the next attempt.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: QuizConfig,
    client: reqwest::Client,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Creates a provider with a default HTTP client.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: QuizConfig) -> Self {
        info!("Creating Gemini provider");
        Self {
            config,
            client: reqwest::Client::new(),
            api_key: None,
        }
    }

    /// Uses `client` for all requests.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Uses `key` instead of reading the configured environment variable.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Gets the configuration.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[instrument(skip(self), fields(var = %self.config.api_key_env()))]
    fn api_key(&self) -> Result<String, QuizError> {
        let key = match &self.api_key {
            Some(key) => key.clone(),
            None => std::env::var(self.config.api_key_env()).unwrap_or_default(),
        };
        if key.trim().is_empty() {
            return Err(QuizError::configuration(format!(
                "{} is not configured in environment variables",
                self.config.api_key_env()
            )));
        }
        Ok(key)
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint().trim_end_matches('/'),
            self.config.model()
        )
    }

    /// Builds the request body: the instruction plus a JSON response schema.
    #[instrument(skip(self))]
    pub fn request_body(&self) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": self.config.effective_prompt() }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }
}

/// Schema for an array of `{word, definition}` objects.
fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": {
                    "type": "STRING",
                    "description": "The word being defined."
                },
                "definition": {
                    "type": "STRING",
                    "description": "A short definition of the word."
                }
            },
            "required": ["word", "definition"]
        }
    })
}

#[async_trait]
impl QuizSource for GeminiProvider {
    #[instrument(skip(self), fields(model = %self.config.model()))]
    async fn fetch(&self) -> Result<Vec<QuizQuestion>, QuizError> {
        let api_key = self.api_key()?;

        debug!(url = %self.url(), "Sending request to Gemini");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&self.request_body())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Gemini API request failed");
                QuizError::service(format!("Gemini API request failed: {}", e))
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response");
            QuizError::service(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, response = %response_text, "Gemini API error");
            return Err(QuizError::service(format!(
                "Gemini API error {}: {}",
                status, response_text
            )));
        }

        let generated = extract_generated_text(&response_text)?;
        let questions = parse_questions(&generated)?;

        if questions.len() != *self.config.question_count() {
            warn!(
                requested = self.config.question_count(),
                received = questions.len(),
                "Question count differs from request"
            );
        }

        info!(count = questions.len(), "Fetched quiz questions");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let provider =
            GeminiProvider::new(QuizConfig::default().with_endpoint("http://localhost:1234/v1beta/"));
        assert_eq!(
            provider.url(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_carries_prompt_and_schema() {
        let provider = GeminiProvider::new(QuizConfig::default());
        let body = provider.request_body();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("10"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["required"],
            json!(["word", "definition"])
        );
    }

    #[test]
    fn test_blank_explicit_key_is_configuration_error() {
        let provider = GeminiProvider::new(QuizConfig::default()).with_api_key("  ");
        let err = provider.api_key().unwrap_err();
        assert_eq!(err.kind(), crate::QuizErrorKind::Configuration);
    }
}
