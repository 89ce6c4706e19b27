//! Shape validation for generated quiz data.

use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::{QuizError, QuizQuestion};

/// Pulls the generated text out of a `generateContent` response body.
#[instrument(skip(body), fields(body_len = body.len()))]
pub fn extract_generated_text(body: &str) -> Result<String, QuizError> {
    let envelope: Value = serde_json::from_str(body).map_err(|e| {
        error!(error = ?e, "Response envelope is not JSON");
        QuizError::data_shape(format!("Failed to parse response envelope: {}", e))
    })?;

    let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| {
            error!(response = %envelope, "No text content in response");
            QuizError::data_shape("No text content in response")
        })?;

    debug!(text_len = text.len(), "Extracted generated text");
    Ok(text.to_string())
}

/// Parses generated JSON into questions.
///
/// The payload must be a non-empty array whose every element is an object
/// with non-empty string `word` and `definition` fields. Extra fields are
/// ignored.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_questions(text: &str) -> Result<Vec<QuizQuestion>, QuizError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = ?e, "Generated text is not JSON");
        QuizError::data_shape(format!("Generated text is not valid JSON: {}", e))
    })?;

    let Value::Array(items) = value else {
        return Err(QuizError::data_shape("Expected a JSON array of questions"));
    };

    if items.is_empty() {
        return Err(QuizError::data_shape("Received an empty question list"));
    }

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(QuizError::data_shape(format!("Item {} is not an object", i)));
            }
            let question: QuizQuestion = serde_json::from_value(item).map_err(|e| {
                QuizError::data_shape(format!("Item {} is not a word/definition pair: {}", i, e))
            })?;
            if question.word.trim().is_empty() || question.definition.trim().is_empty() {
                return Err(QuizError::data_shape(format!(
                    "Item {} has an empty word or definition",
                    i
                )));
            }
            Ok(question)
        })
        .collect::<Result<Vec<_>, QuizError>>()?;

    debug!(count = questions.len(), "Questions validated");
    Ok(questions)
}
