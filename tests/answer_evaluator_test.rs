//! Tests for answer checking.

use quizfolio::{FeedbackKind, evaluate};

#[test]
fn test_padded_mixed_case_answer_is_correct() {
    assert_eq!(evaluate(" Apple ", "apple"), FeedbackKind::Correct);
    assert_eq!(evaluate("APPLE", "Apple"), FeedbackKind::Correct);
}

#[test]
fn test_near_miss_is_incorrect() {
    assert_eq!(evaluate("apples", "apple"), FeedbackKind::Incorrect);
    assert_eq!(evaluate("appl", "apple"), FeedbackKind::Incorrect);
}

#[test]
fn test_empty_answer_is_incorrect() {
    assert_eq!(evaluate("", "apple"), FeedbackKind::Incorrect);
    assert_eq!(evaluate("   ", "apple"), FeedbackKind::Incorrect);
}

#[test]
fn test_korean_answer_matches_exactly() {
    assert_eq!(evaluate(" 사과 ", "사과"), FeedbackKind::Correct);
    assert_eq!(evaluate("사과나무", "사과"), FeedbackKind::Incorrect);
}

#[test]
fn test_never_reports_none() {
    for input in ["", "x", "apple", " APPLE "] {
        assert_ne!(evaluate(input, "apple"), FeedbackKind::None);
    }
}

#[test]
fn test_case_folding_equates_sharp_s_with_ss() {
    assert_eq!(evaluate("STRASSE", "Straße"), FeedbackKind::Correct);
    assert_eq!(evaluate(" strasse ", "STRAẞE"), FeedbackKind::Correct);
    assert_eq!(evaluate("ẞ", "ss"), FeedbackKind::Correct);
}
