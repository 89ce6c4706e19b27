//! Word-definition quiz: domain types, answer checking and the session state machine.

mod controller;
mod error;
mod evaluator;
mod types;

pub use controller::{GameController, QuizEvent, Transition};
pub use error::{QuizError, QuizErrorKind};
pub use evaluator::evaluate;
pub use types::{Feedback, FeedbackKind, GameState, QuizQuestion};
