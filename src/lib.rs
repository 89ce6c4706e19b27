//! Quizfolio library - a Gemini-backed word quiz and an in-memory portfolio gallery
//!
//! # Architecture
//!
//! - **Quiz**: session state machine, answer checking and localized messages
//! - **Provider**: Gemini `generateContent` client with response validation
//! - **Gallery**: ordered project cards with tag filtering
//! - **TUI**: ratatui screens for both applications
//!
//! # Example
//!
//! ```no_run
//! use quizfolio::{GameController, GeminiProvider, Locale, QuizConfig};
//!
//! # async fn example() {
//! let provider = GeminiProvider::new(QuizConfig::default());
//! let mut controller = GameController::new(Locale::English);
//! controller.run_start(&provider).await;
//! controller.set_answer("apple");
//! controller.submit_answer();
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod gallery;
mod locale;
mod provider;
mod quiz;

pub mod cli;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, QuizConfig};

// Crate-level exports - Localization
pub use locale::Locale;

// Crate-level exports - Quiz
pub use quiz::{
    Feedback, FeedbackKind, GameController, GameState, QuizError, QuizErrorKind, QuizEvent,
    QuizQuestion, Transition, evaluate,
};

// Crate-level exports - Providers
pub use provider::{GeminiProvider, QuizSource, extract_generated_text, parse_questions};

// Crate-level exports - Gallery
pub use gallery::{
    ALL_TAG, GalleryError, GalleryStore, Website, WebsiteDraft, WebsiteField, parse_tags,
    seed_websites,
};
