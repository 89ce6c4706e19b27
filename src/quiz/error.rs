//! Quiz data errors.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// Classification of a failed quiz data fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum QuizErrorKind {
    /// The API credential is missing from the environment.
    #[display("configuration")]
    Configuration,
    /// The transport failed or the service answered with an error status.
    #[display("service")]
    Service,
    /// The response did not have the expected shape.
    #[display("data shape")]
    DataShape,
}

/// Quiz data error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Quiz {} error: {} at {}:{}", kind, message, file, line)]
pub struct QuizError {
    /// What went wrong, coarsely.
    pub kind: QuizErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl QuizError {
    /// Creates a new quiz error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: QuizErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(kind = %kind, error_message = %message, "Quiz error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Missing or blank credential.
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(QuizErrorKind::Configuration, message)
    }

    /// Transport or upstream failure.
    #[track_caller]
    pub fn service(message: impl Into<String>) -> Self {
        Self::new(QuizErrorKind::Service, message)
    }

    /// Response failed validation.
    #[track_caller]
    pub fn data_shape(message: impl Into<String>) -> Self {
        Self::new(QuizErrorKind::DataShape, message)
    }

    /// Returns the error classification.
    pub fn kind(&self) -> QuizErrorKind {
        self.kind
    }
}
