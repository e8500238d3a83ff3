// Tense Detector Rule Classifier
// Derives sentence type and complexity from match counts

use crate::types::{AnalysisResult, Complexity, SentenceType};

/// Sentence type from tense and connector counts
///
/// A connector only upgrades a sentence with at least two tense matches,
/// and takes priority over `Compound`.
pub fn classify_sentence_type(total_tense_matches: usize, connector_count: usize) -> SentenceType {
    match (connector_count, total_tense_matches) {
        (c, t) if c > 0 && t >= 2 => SentenceType::Complex,
        (_, t) if t >= 2 => SentenceType::Compound,
        _ => SentenceType::Simple,
    }
}

/// Complexity from modal/negative presence and match density
pub fn classify_complexity(
    has_modal_or_negative: bool,
    connector_count: usize,
    total_tense_matches: usize,
) -> Complexity {
    if has_modal_or_negative {
        Complexity::Advanced
    } else if connector_count > 1 || total_tense_matches > 2 {
        Complexity::Intermediate
    } else {
        Complexity::Basic
    }
}

/// Applies classification rules to scanned results
///
/// Only counts already stored on the result are used; the text is not
/// scanned again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Set `sentence_type` and `complexity` on a scanned result
    pub fn apply(&self, result: &mut AnalysisResult) {
        let total = result.total_tense_matches();
        let connectors = result.connectors.len();
        let advanced = !result.modals.is_empty() || !result.negatives.is_empty();

        result.sentence_type = classify_sentence_type(total, connectors);
        result.complexity = classify_complexity(advanced, connectors, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Connector;

    #[test]
    fn test_sentence_type_table() {
        assert_eq!(classify_sentence_type(0, 0), SentenceType::Simple);
        assert_eq!(classify_sentence_type(1, 3), SentenceType::Simple);
        assert_eq!(classify_sentence_type(2, 0), SentenceType::Compound);
        assert_eq!(classify_sentence_type(2, 1), SentenceType::Complex);
        assert_eq!(classify_sentence_type(5, 2), SentenceType::Complex);
    }

    #[test]
    fn test_complexity_table() {
        assert_eq!(classify_complexity(false, 0, 0), Complexity::Basic);
        assert_eq!(classify_complexity(false, 1, 2), Complexity::Basic);
        assert_eq!(classify_complexity(false, 2, 0), Complexity::Intermediate);
        assert_eq!(classify_complexity(false, 0, 3), Complexity::Intermediate);
        assert_eq!(classify_complexity(true, 0, 0), Complexity::Advanced);
    }

    #[test]
    fn test_apply() {
        let mut result = AnalysisResult::new("x");
        result.present_continuous = vec!["am reading".into(), "is cooking".into()];
        result.connectors.push(Connector::While);
        result.negatives.push("are not listening".into());

        RuleClassifier::new().apply(&mut result);
        assert_eq!(result.sentence_type, SentenceType::Complex);
        assert_eq!(result.complexity, Complexity::Advanced);
    }

    #[test]
    fn test_modals_do_not_count_as_tenses() {
        let mut result = AnalysisResult::new("x");
        result.modals = vec!["may be studying".into(), "might be sleeping".into()];

        RuleClassifier::new().apply(&mut result);
        assert_eq!(result.sentence_type, SentenceType::Simple);
        assert_eq!(result.complexity, Complexity::Advanced);
    }
}
