// Tense Detector Input Validator
// Screens raw input before any pattern matching runs

use crate::config::LogLevel;
use crate::data::UNSAFE_MARKUP_PATTERNS;
use crate::types::{AnalysisError, TextInput};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error, warn};

/// Default maximum input length in characters
///
/// Counted in Unicode scalar values (`chars()`), not UTF-16 code units, so
/// text with astral-plane characters such as emoji may hold more of them
/// than a UTF-16 count would allow.
pub const MAX_TEXT_LENGTH: usize = 5000;

static UNSAFE_MARKUP: Lazy<Result<Vec<Regex>, regex::Error>> = Lazy::new(|| {
    UNSAFE_MARKUP_PATTERNS
        .iter()
        .map(|source| Regex::new(source))
        .collect()
});

/// Input validator with a configurable length limit
///
/// Checks run in a fixed order and stop at the first failure:
/// type, length, emptiness, unsafe markup, plausible English content.
/// Rejections are logged only at or above the validator's log level.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    max_text_length: usize,
    log_level: LogLevel,
}

impl InputValidator {
    pub fn new(max_text_length: usize) -> Self {
        Self {
            max_text_length,
            log_level: LogLevel::default(),
        }
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    fn logs(&self, level: LogLevel) -> bool {
        level >= self.log_level
    }

    /// Validate raw input and narrow it to text
    ///
    /// # Examples
    /// ```
    /// # use tense_detector::{InputValidator, ErrorReason};
    /// let validator = InputValidator::default();
    /// assert_eq!(validator.validate("I am reading".into()).unwrap(), "I am reading");
    ///
    /// let err = validator.validate("   ".into()).unwrap_err();
    /// assert_eq!(err.reason(), ErrorReason::Empty);
    /// ```
    pub fn validate<'a>(&self, input: TextInput<'a>) -> Result<&'a str, AnalysisError> {
        let text = match input {
            TextInput::Text(text) => text,
            TextInput::NonText(_) => {
                if self.logs(LogLevel::Warn) {
                    warn!(kind = input.kind(), "Invalid input type");
                }
                return Err(AnalysisError::InvalidType {
                    found: input.kind(),
                });
            }
        };

        let length = text.chars().count();
        if length > self.max_text_length {
            if self.logs(LogLevel::Warn) {
                warn!(length, max = self.max_text_length, "Input text too long");
            }
            return Err(AnalysisError::TooLong {
                length,
                max: self.max_text_length,
            });
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            if self.logs(LogLevel::Debug) {
                debug!("Empty input received");
            }
            return Err(AnalysisError::Empty);
        }

        self.check_markup(text)?;
        self.check_content(trimmed)?;

        Ok(text)
    }

    /// Reject script tags, script URIs, inline handlers and embedded frames
    ///
    /// Runs on the untrimmed input.
    fn check_markup(&self, text: &str) -> Result<(), AnalysisError> {
        let patterns = UNSAFE_MARKUP.as_ref().map_err(|e| {
            if self.logs(LogLevel::Error) {
                error!(error = %e, "Unsafe markup table failed to compile");
            }
            AnalysisError::Validation(e.to_string())
        })?;

        if let Some(hit) = patterns.iter().find(|re| re.is_match(text)) {
            if self.logs(LogLevel::Error) {
                let preview: String = text.chars().take(100).collect();
                error!(
                    pattern = hit.as_str(),
                    text = %preview,
                    "Potentially dangerous input detected"
                );
            }
            return Err(AnalysisError::SecurityRisk {
                pattern: hit.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Require at least one ASCII letter and at most half all-digit tokens
    fn check_content(&self, trimmed: &str) -> Result<(), AnalysisError> {
        let has_letters = trimmed.chars().any(|c| c.is_ascii_alphabetic());

        let mut word_count = 0usize;
        let mut numeric_words = 0usize;
        for token in trimmed.split_whitespace() {
            word_count += 1;
            if token.chars().all(|c| c.is_ascii_digit()) {
                numeric_words += 1;
            }
        }
        let too_many_numbers = numeric_words * 2 > word_count;

        if !has_letters || too_many_numbers {
            if self.logs(LogLevel::Warn) {
                warn!(
                    has_letters,
                    word_count, numeric_words, "Input does not appear to be natural English text"
                );
            }
            return Err(AnalysisError::InvalidContent);
        }
        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(MAX_TEXT_LENGTH)
    }
}
