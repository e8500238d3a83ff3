// Integration tests for input validation

use serde_json::json;
use tense_detector::{ErrorReason, InputValidator, TenseDetector};

fn all_matches_empty(detector: &TenseDetector, text: &str) -> bool {
    let result = detector.analyze(text);
    result.total_tense_matches() == 0
        && result.modals.is_empty()
        && result.negatives.is_empty()
        && result.connectors.is_empty()
}

// ============ Failure Reasons ============

#[test]
fn test_empty_input() {
    let detector = TenseDetector::default();
    let result = detector.analyze("");

    assert_eq!(result.error, Some(ErrorReason::Empty));
    assert!(result.present_continuous.is_empty());
    assert!(result.connectors.is_empty());
    assert!(all_matches_empty(&detector, ""));
}

#[test]
fn test_whitespace_only_input() {
    let detector = TenseDetector::default();
    let result = detector.analyze(" \t\n ");
    assert_eq!(result.error, Some(ErrorReason::Empty));
}

#[test]
fn test_too_long_input() {
    let detector = TenseDetector::default();
    let text = "a".repeat(5001);
    let result = detector.analyze(text.as_str());

    assert_eq!(result.error, Some(ErrorReason::TooLong));
    assert_eq!(
        result.message.as_deref(),
        Some("Input text exceeds maximum length of 5000 characters")
    );
}

#[test]
fn test_script_injection() {
    let detector = TenseDetector::default();
    let result = detector.analyze("<script>alert(1)</script>");

    assert_eq!(result.error, Some(ErrorReason::SecurityRisk));
    assert_eq!(
        result.message.as_deref(),
        Some("Input contains potentially unsafe content")
    );
    assert!(all_matches_empty(&detector, "<script>alert(1)</script>"));
}

#[test]
fn test_inline_handler_inside_sentence() {
    let detector = TenseDetector::default();
    let result = detector.analyze("I am reading <a onclick=steal()>this</a>");
    assert_eq!(result.error, Some(ErrorReason::SecurityRisk));
}

#[test]
fn test_non_text_inputs() {
    let detector = TenseDetector::default();
    let values = [
        json!(null),
        json!(42),
        json!(true),
        json!(["I am reading"]),
        json!({"text": "x"}),
    ];
    for value in values {
        let result = detector.analyze(&value);
        assert_eq!(result.error, Some(ErrorReason::InvalidType), "{}", value);
        assert_eq!(result.message.as_deref(), Some("Input must be a string"));
    }
}

#[test]
fn test_json_string_is_text() {
    let detector = TenseDetector::default();
    let value = json!("They were playing football");
    let result = detector.analyze(&value);

    assert!(result.is_ok());
    assert_eq!(result.past_continuous, vec!["were playing"]);
}

#[test]
fn test_numeric_content() {
    let detector = TenseDetector::default();
    assert_eq!(detector.analyze("123 456 789").error, Some(ErrorReason::InvalidContent));
    assert_eq!(detector.analyze("call 555 1234 now 99").error, Some(ErrorReason::InvalidContent));
}

// ============ Validator API ============

#[test]
fn test_custom_length_limit() {
    let validator = InputValidator::new(10);
    assert!(validator.validate("short one".into()).is_ok());
    let err = validator.validate("this is far too long".into()).unwrap_err();
    assert_eq!(err.reason(), ErrorReason::TooLong);
}

#[test]
fn test_validate_returns_untrimmed_text() {
    let validator = InputValidator::default();
    assert_eq!(validator.validate("  I am here  ".into()).unwrap(), "  I am here  ");
}
