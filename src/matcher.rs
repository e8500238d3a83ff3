// Tense Detector Pattern Engine
// Runs the full pattern table over normalized, lower-cased text

use crate::pattern::{find_matches, has_connector};
use crate::types::{AnalysisError, AnalysisResult, Connector, TenseCategory};

/// Pattern engine applying every category and connector to a sentence
///
/// The engine holds no per-call state, so one instance can scan any
/// number of sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEngine;

impl PatternEngine {
    pub fn new() -> Self {
        Self
    }

    /// Scan lower-cased text and populate match fields and connectors
    ///
    /// Classification labels are left at their defaults.
    ///
    /// # Arguments
    /// * `original_text` - Input as received, stored unmodified
    /// * `lower` - Normalized, lower-cased text to scan
    ///
    /// # Example
    /// ```
    /// # use tense_detector::{PatternEngine, Connector};
    /// let text = "I am reading while she is cooking";
    /// let result = PatternEngine::new().scan(text, &text.to_lowercase()).unwrap();
    /// assert_eq!(result.present_continuous, vec!["am reading", "is cooking"]);
    /// assert_eq!(result.connectors, vec![Connector::While]);
    /// ```
    pub fn scan(&self, original_text: &str, lower: &str) -> Result<AnalysisResult, AnalysisError> {
        let mut result = AnalysisResult::new(original_text);

        for category in TenseCategory::ALL {
            *result.matches_mut(category) = find_matches(category, lower)?;
        }

        for connector in Connector::ALL {
            let present = has_connector(connector, lower)?;
            result.set_connector(connector, present);
            if present {
                result.connectors.push(connector);
            }
        }

        Ok(result)
    }
}
