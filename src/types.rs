// Tense Detector Type Definitions
// Core types for validation, pattern matching and analysis results

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Pattern categories scanned for every sentence
///
/// The first ten variants are tense categories and count towards the
/// sentence classification. `Modal` and `NegativeContinuous` only affect
/// complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenseCategory {
    /// am/is/are + verb-ing → "is cooking"
    PresentContinuous,
    /// was/were + verb-ing → "was reading"
    PastContinuous,
    /// wasn't/weren't + verb-ing
    PastContinuousNegative,
    /// Was/Were + subject + verb-ing → "was she sleeping"
    PastContinuousInterrogative,
    /// will be + verb-ing
    FutureContinuous,
    /// has/have been + verb-ing
    PresentPerfectContinuous,
    /// had been + verb-ing
    PastPerfectContinuous,
    /// Closed list of irregular past forms (ate, began, broke, ...)
    SimplePastPositive,
    /// didn't + verb
    SimplePastNegative,
    /// Did + subject + verb → "did you see"
    SimplePastInterrogative,
    /// modal + be + verb-ing → "might be sleeping"
    Modal,
    /// auxiliary + not + verb-ing → "is not sleeping"
    NegativeContinuous,
}

impl TenseCategory {
    /// Every category in scan order
    pub const ALL: [TenseCategory; 12] = [
        TenseCategory::PresentContinuous,
        TenseCategory::PastContinuous,
        TenseCategory::PastContinuousNegative,
        TenseCategory::PastContinuousInterrogative,
        TenseCategory::FutureContinuous,
        TenseCategory::PresentPerfectContinuous,
        TenseCategory::PastPerfectContinuous,
        TenseCategory::SimplePastPositive,
        TenseCategory::SimplePastNegative,
        TenseCategory::SimplePastInterrogative,
        TenseCategory::Modal,
        TenseCategory::NegativeContinuous,
    ];

    /// Whether matches in this category count towards `total_tense_matches`
    pub fn is_tense(&self) -> bool {
        !matches!(self, TenseCategory::Modal | TenseCategory::NegativeContinuous)
    }

    /// Field name of this category in the serialized result
    pub fn name(&self) -> &'static str {
        match self {
            TenseCategory::PresentContinuous => "presentContinuous",
            TenseCategory::PastContinuous => "pastContinuous",
            TenseCategory::PastContinuousNegative => "pastContinuousNegative",
            TenseCategory::PastContinuousInterrogative => "pastContinuousInterrogative",
            TenseCategory::FutureContinuous => "futureContinuous",
            TenseCategory::PresentPerfectContinuous => "presentPerfectContinuous",
            TenseCategory::PastPerfectContinuous => "pastPerfectContinuous",
            TenseCategory::SimplePastPositive => "simplePastPositive",
            TenseCategory::SimplePastNegative => "simplePastNegative",
            TenseCategory::SimplePastInterrogative => "simplePastInterrogative",
            TenseCategory::Modal => "modals",
            TenseCategory::NegativeContinuous => "negatives",
        }
    }
}

impl std::fmt::Display for TenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Temporal connectors linking two clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connector {
    #[serde(rename = "while")]
    While,
    #[serde(rename = "when")]
    When,
    #[serde(rename = "as soon as")]
    AsSoonAs,
    #[serde(rename = "until")]
    Until,
    #[serde(rename = "before")]
    Before,
    #[serde(rename = "after")]
    After,
    #[serde(rename = "since")]
    Since,
}

impl Connector {
    /// Connectors in the fixed checking order
    pub const ALL: [Connector; 7] = [
        Connector::While,
        Connector::When,
        Connector::AsSoonAs,
        Connector::Until,
        Connector::Before,
        Connector::After,
        Connector::Since,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::While => "while",
            Connector::When => "when",
            Connector::AsSoonAs => "as soon as",
            Connector::Until => "until",
            Connector::Before => "before",
            Connector::After => "after",
            Connector::Since => "since",
        }
    }
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse structural classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    #[default]
    Simple,
    Compound,
    Complex,
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceType::Simple => write!(f, "simple"),
            SentenceType::Compound => write!(f, "compound"),
            SentenceType::Complex => write!(f, "complex"),
        }
    }
}

/// Coarse difficulty classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Basic => write!(f, "basic"),
            Complexity::Intermediate => write!(f, "intermediate"),
            Complexity::Advanced => write!(f, "advanced"),
        }
    }
}

/// Machine-readable failure codes carried in `AnalysisResult::error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorReason {
    #[serde(rename = "invalid_type")]
    InvalidType,
    #[serde(rename = "too_long")]
    TooLong,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "security_risk")]
    SecurityRisk,
    #[serde(rename = "invalid_content")]
    InvalidContent,
    #[serde(rename = "validation_error")]
    ValidationError,
    #[serde(rename = "analysis_error")]
    AnalysisError,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::InvalidType => "invalid_type",
            ErrorReason::TooLong => "too_long",
            ErrorReason::Empty => "empty",
            ErrorReason::SecurityRisk => "security_risk",
            ErrorReason::InvalidContent => "invalid_content",
            ErrorReason::ValidationError => "validation_error",
            ErrorReason::AnalysisError => "analysis_error",
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation and analysis errors
///
/// The `Display` text is the user-facing message stored in
/// `AnalysisResult::message`.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Input must be a string")]
    InvalidType { found: &'static str },

    #[error("Input text exceeds maximum length of {max} characters")]
    TooLong { length: usize, max: usize },

    #[error("Input text is empty or contains only whitespace")]
    Empty,

    #[error("Input contains potentially unsafe content")]
    SecurityRisk { pattern: String },

    #[error("Input does not appear to be valid English text")]
    InvalidContent,

    #[error("An error occurred while validating input")]
    Validation(String),

    #[error("An error occurred while analyzing the sentence")]
    Analysis(String),
}

impl AnalysisError {
    /// Failure code for this error
    pub fn reason(&self) -> ErrorReason {
        match self {
            AnalysisError::InvalidType { .. } => ErrorReason::InvalidType,
            AnalysisError::TooLong { .. } => ErrorReason::TooLong,
            AnalysisError::Empty => ErrorReason::Empty,
            AnalysisError::SecurityRisk { .. } => ErrorReason::SecurityRisk,
            AnalysisError::InvalidContent => ErrorReason::InvalidContent,
            AnalysisError::Validation(_) => ErrorReason::ValidationError,
            AnalysisError::Analysis(_) => ErrorReason::AnalysisError,
        }
    }
}

/// Raw input at the library boundary
///
/// Callers may hand over arbitrary JSON values; only text survives
/// validation.
#[derive(Debug, Clone, Copy)]
pub enum TextInput<'a> {
    Text(&'a str),
    NonText(&'a Value),
}

impl<'a> TextInput<'a> {
    /// Type name reported for rejected inputs
    pub fn kind(&self) -> &'static str {
        match self {
            TextInput::Text(_) => "string",
            TextInput::NonText(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }

    /// Text recorded as `original_text`
    pub fn raw_text(&self) -> String {
        match self {
            TextInput::Text(text) => (*text).to_string(),
            TextInput::NonText(value) => value.to_string(),
        }
    }
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        TextInput::Text(text)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        TextInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for TextInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => TextInput::Text(text.as_str()),
            other => TextInput::NonText(other),
        }
    }
}

/// Snapshot of one analyzed sentence
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Input exactly as received
    pub original_text: String,

    pub has_while: bool,
    pub has_when: bool,
    pub has_as_soon_as: bool,
    pub has_until: bool,
    pub has_before: bool,
    pub has_after: bool,
    pub has_since: bool,

    pub present_continuous: Vec<String>,
    pub past_continuous: Vec<String>,
    pub past_continuous_negative: Vec<String>,
    pub past_continuous_interrogative: Vec<String>,
    pub future_continuous: Vec<String>,
    pub present_perfect_continuous: Vec<String>,
    pub past_perfect_continuous: Vec<String>,
    pub simple_past_positive: Vec<String>,
    pub simple_past_negative: Vec<String>,
    pub simple_past_interrogative: Vec<String>,
    pub modals: Vec<String>,
    pub negatives: Vec<String>,

    /// Connectors present, one entry per type, in checking order
    pub connectors: Vec<Connector>,

    pub sentence_type: SentenceType,
    pub complexity: Complexity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Wall-clock duration of the call in milliseconds
    pub processing_time: f64,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub from_cache: bool,
}

impl AnalysisResult {
    /// Create an empty result for the given input
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            ..Default::default()
        }
    }

    /// Failure shape: every match field empty, error and message set
    pub fn failed(original_text: impl Into<String>, error: &AnalysisError) -> Self {
        Self {
            original_text: original_text.into(),
            error: Some(error.reason()),
            message: Some(error.to_string()),
            ..Default::default()
        }
    }

    /// True when no error was recorded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Matches recorded for a category
    pub fn matches(&self, category: TenseCategory) -> &[String] {
        match category {
            TenseCategory::PresentContinuous => &self.present_continuous,
            TenseCategory::PastContinuous => &self.past_continuous,
            TenseCategory::PastContinuousNegative => &self.past_continuous_negative,
            TenseCategory::PastContinuousInterrogative => &self.past_continuous_interrogative,
            TenseCategory::FutureContinuous => &self.future_continuous,
            TenseCategory::PresentPerfectContinuous => &self.present_perfect_continuous,
            TenseCategory::PastPerfectContinuous => &self.past_perfect_continuous,
            TenseCategory::SimplePastPositive => &self.simple_past_positive,
            TenseCategory::SimplePastNegative => &self.simple_past_negative,
            TenseCategory::SimplePastInterrogative => &self.simple_past_interrogative,
            TenseCategory::Modal => &self.modals,
            TenseCategory::NegativeContinuous => &self.negatives,
        }
    }

    pub(crate) fn matches_mut(&mut self, category: TenseCategory) -> &mut Vec<String> {
        match category {
            TenseCategory::PresentContinuous => &mut self.present_continuous,
            TenseCategory::PastContinuous => &mut self.past_continuous,
            TenseCategory::PastContinuousNegative => &mut self.past_continuous_negative,
            TenseCategory::PastContinuousInterrogative => &mut self.past_continuous_interrogative,
            TenseCategory::FutureContinuous => &mut self.future_continuous,
            TenseCategory::PresentPerfectContinuous => &mut self.present_perfect_continuous,
            TenseCategory::PastPerfectContinuous => &mut self.past_perfect_continuous,
            TenseCategory::SimplePastPositive => &mut self.simple_past_positive,
            TenseCategory::SimplePastNegative => &mut self.simple_past_negative,
            TenseCategory::SimplePastInterrogative => &mut self.simple_past_interrogative,
            TenseCategory::Modal => &mut self.modals,
            TenseCategory::NegativeContinuous => &mut self.negatives,
        }
    }

    /// Whether a connector was found
    pub fn has_connector(&self, connector: Connector) -> bool {
        match connector {
            Connector::While => self.has_while,
            Connector::When => self.has_when,
            Connector::AsSoonAs => self.has_as_soon_as,
            Connector::Until => self.has_until,
            Connector::Before => self.has_before,
            Connector::After => self.has_after,
            Connector::Since => self.has_since,
        }
    }

    pub(crate) fn set_connector(&mut self, connector: Connector, present: bool) {
        let flag = match connector {
            Connector::While => &mut self.has_while,
            Connector::When => &mut self.has_when,
            Connector::AsSoonAs => &mut self.has_as_soon_as,
            Connector::Until => &mut self.has_until,
            Connector::Before => &mut self.has_before,
            Connector::After => &mut self.has_after,
            Connector::Since => &mut self.has_since,
        };
        *flag = present;
    }

    /// Sum of matches over the ten tense categories
    pub fn total_tense_matches(&self) -> usize {
        TenseCategory::ALL
            .iter()
            .filter(|c| c.is_tense())
            .map(|c| self.matches(*c).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_split() {
        let tense_count = TenseCategory::ALL.iter().filter(|c| c.is_tense()).count();
        assert_eq!(tense_count, 10);
        assert!(!TenseCategory::Modal.is_tense());
        assert!(!TenseCategory::NegativeContinuous.is_tense());
    }

    #[test]
    fn test_display() {
        assert_eq!(SentenceType::Complex.to_string(), "complex");
        assert_eq!(Complexity::Intermediate.to_string(), "intermediate");
        assert_eq!(Connector::AsSoonAs.to_string(), "as soon as");
        assert_eq!(ErrorReason::SecurityRisk.to_string(), "security_risk");
        assert_eq!(TenseCategory::Modal.to_string(), "modals");
    }

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::TooLong {
            length: 6000,
            max: 5000,
        };
        assert_eq!(err.reason(), ErrorReason::TooLong);
        assert_eq!(
            err.to_string(),
            "Input text exceeds maximum length of 5000 characters"
        );
        assert_eq!(
            AnalysisError::Analysis("boom".into()).reason(),
            ErrorReason::AnalysisError
        );
    }

    #[test]
    fn test_failed_result_shape() {
        let result = AnalysisResult::failed("", &AnalysisError::Empty);
        assert!(!result.is_ok());
        assert_eq!(result.error, Some(ErrorReason::Empty));
        assert_eq!(
            result.message.as_deref(),
            Some("Input text is empty or contains only whitespace")
        );
        assert_eq!(result.total_tense_matches(), 0);
        assert!(result.connectors.is_empty());
        assert_eq!(result.sentence_type, SentenceType::Simple);
        assert_eq!(result.complexity, Complexity::Basic);
    }

    #[test]
    fn test_text_input_narrowing() {
        let value = json!("hello");
        assert!(matches!(TextInput::from(&value), TextInput::Text("hello")));

        let number = json!(42);
        let input = TextInput::from(&number);
        assert!(matches!(input, TextInput::NonText(_)));
        assert_eq!(input.kind(), "number");
        assert_eq!(input.raw_text(), "42");
    }

    #[test]
    fn test_serialized_field_names() {
        let mut result = AnalysisResult::new("I am reading");
        result.present_continuous.push("am reading".into());
        result.connectors.push(Connector::AsSoonAs);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["originalText"], "I am reading");
        assert_eq!(value["presentContinuous"][0], "am reading");
        assert_eq!(value["connectors"][0], "as soon as");
        assert_eq!(value["sentenceType"], "simple");
        assert!(value.get("error").is_none());
        assert!(value.get("fromCache").is_none());
    }
}
