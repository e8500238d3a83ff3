//! # Tense Detector: English Tense Classification
//!
//! Detects continuous, perfect-continuous and simple-past forms in an English
//! sentence using a fixed table of regular expressions, then labels the
//! sentence by structure and difficulty.
//!
//! ## Pipeline
//!
//! 1. **Validate** - reject non-text, over-long, blank, unsafe or non-English input
//! 2. **Normalize** - collapse whitespace; the result is the cache key
//! 3. **Cache lookup** - return a memoized analysis on a hit
//! 4. **Scan** - run every pattern over the lower-cased text
//! 5. **Classify** - derive sentence type and complexity from match counts
//!
//! ## Example Usage
//!
//! ```
//! use tense_detector::{TenseDetector, Complexity, ErrorReason};
//!
//! let detector = TenseDetector::default();
//!
//! let result = detector.analyze("I cannot be working while you are not listening");
//! assert_eq!(result.negatives, vec!["are not listening"]);
//! assert_eq!(result.complexity, Complexity::Advanced);
//!
//! let rejected = detector.analyze("<script>alert(1)</script>");
//! assert_eq!(rejected.error, Some(ErrorReason::SecurityRisk));
//!
//! println!("{}", detector.stats().cache.hit_rate);
//! ```
//!
//! ## Architecture
//!
//! - **Input Validator** - Screens raw input and narrows it to text
//! - **Pattern Table** - Compiled regexes per tense category and connector
//! - **Pattern Engine** - Collects de-duplicated matches and connector flags
//! - **Rule Classifier** - Sentence type and complexity labels
//! - **Analysis Cache** - Bounded LRU keyed by normalized input
//! - **TenseDetector API** - Main entry point combining all components

pub mod cache;
pub mod config;
pub mod data;
pub mod detector;
pub mod matcher;
pub mod pattern;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export main types and functions for convenience
pub use cache::{AnalysisCache, CacheStats};
pub use config::{DetectorConfig, LogLevel};
pub use detector::{
    analyze_sentence, clear_cache, default_detector, system_stats, DetectorStats, TenseDetector,
};
pub use matcher::PatternEngine;
pub use pattern::{find_matches, normalize_text};
pub use rules::RuleClassifier;
pub use types::{
    AnalysisError, AnalysisResult, Complexity, Connector, ErrorReason, SentenceType,
    TenseCategory, TextInput,
};
pub use validator::InputValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
