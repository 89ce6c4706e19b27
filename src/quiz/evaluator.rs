//! Answer checking.

use tracing::{debug, instrument};

use super::FeedbackKind;

/// Decides whether `user_input` names `correct_word`.
///
/// Surrounding whitespace in the input is ignored and both sides are compared
/// under full Unicode case folding, so `STRASSE` matches `Straße`. Anything
/// else must match exactly; there is no substring or fuzzy matching.
#[instrument]
pub fn evaluate(user_input: &str, correct_word: &str) -> FeedbackKind {
    let kind = if caseless::default_caseless_match_str(user_input.trim(), correct_word) {
        FeedbackKind::Correct
    } else {
        FeedbackKind::Incorrect
    };
    debug!(kind = %kind, "Answer evaluated");
    kind
}
