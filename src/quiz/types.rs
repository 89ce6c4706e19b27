//! Quiz domain types.

use serde::Deserialize;
use strum::{Display, EnumIter};

/// A single question: the player sees the definition and must name the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct QuizQuestion {
    /// The answer.
    pub word: String,
    /// The clue shown to the player.
    pub definition: String,
}

impl QuizQuestion {
    /// Creates a new question.
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// Phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum GameState {
    /// Waiting for the player to start (possibly showing the last error).
    #[default]
    Initial,
    /// A fetch is in flight; no player input is accepted.
    Loading,
    /// Questions are being answered.
    Playing,
    /// All questions answered; final score is shown.
    Finished,
}

/// Correctness of the last submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum FeedbackKind {
    /// Nothing submitted for the current question yet.
    #[default]
    None,
    /// The answer matched.
    Correct,
    /// The answer did not match.
    Incorrect,
}

/// Feedback shown after a submission, cleared on advance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    /// Correctness.
    pub kind: FeedbackKind,
    /// Localized message for the player.
    pub message: String,
}

impl Feedback {
    /// Empty feedback.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true once an answer has been submitted for the current question.
    pub fn is_set(&self) -> bool {
        self.kind != FeedbackKind::None
    }
}
