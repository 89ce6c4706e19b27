//! Sources of quiz questions.

mod gemini;
mod validate;

pub use gemini::GeminiProvider;
pub use validate::{extract_generated_text, parse_questions};

use async_trait::async_trait;

use crate::{QuizError, QuizQuestion};

/// Something that can produce one batch of quiz questions.
///
/// Every call is a fresh request; implementations must not cache.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Fetches an ordered, non-empty list of questions.
    async fn fetch(&self) -> Result<Vec<QuizQuestion>, QuizError>;
}
