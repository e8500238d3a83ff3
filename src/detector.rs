// Tense Detector Orchestrator
// Main API that ties validation, caching, matching and classification together

use crate::cache::{AnalysisCache, CacheStats};
use crate::config::{DetectorConfig, LogLevel};
use crate::matcher::PatternEngine;
use crate::pattern::normalize_text;
use crate::rules::RuleClassifier;
use crate::types::{AnalysisError, AnalysisResult, TextInput};
use crate::validator::InputValidator;
use crate::VERSION;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Introspection snapshot returned by `TenseDetector::stats`
#[derive(Debug, Clone, Serialize)]
pub struct DetectorStats {
    pub cache: CacheStats,
    pub config: DetectorConfig,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Tense detector
///
/// Combines all components:
/// - Input validation (type, length, markup, content)
/// - Result cache keyed by whitespace-normalized input
/// - Pattern engine (tense categories, modals, negatives, connectors)
/// - Rule classification (sentence type, complexity)
///
/// The cache sits behind a mutex, so a detector can be shared between
/// threads.
pub struct TenseDetector {
    config: DetectorConfig,
    validator: InputValidator,
    engine: PatternEngine,
    classifier: RuleClassifier,
    cache: Mutex<AnalysisCache>,
}

impl TenseDetector {
    /// Create a detector with its own empty cache
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            validator: InputValidator::new(config.max_text_length)
                .with_log_level(config.min_log_level()),
            engine: PatternEngine::new(),
            classifier: RuleClassifier::new(),
            cache: Mutex::new(AnalysisCache::new(config.cache_size)),
            config,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Analyze one sentence
    ///
    /// Never fails: validation and internal errors are reported through
    /// `AnalysisResult::error` and `AnalysisResult::message`.
    ///
    /// # Example
    /// ```
    /// # use tense_detector::{TenseDetector, SentenceType};
    /// let detector = TenseDetector::default();
    /// let result = detector.analyze("I was reading while she was cooking dinner");
    /// assert_eq!(result.past_continuous, vec!["was reading", "was cooking"]);
    /// assert_eq!(result.sentence_type, SentenceType::Complex);
    /// ```
    pub fn analyze<'a>(&self, input: impl Into<TextInput<'a>>) -> AnalysisResult {
        let start = Instant::now();
        let input = input.into();

        let mut result = match self.validator.validate(input) {
            Ok(text) => self.analyze_text(text).unwrap_or_else(|e| {
                if self.config.should_log(LogLevel::Error) {
                    error!(error = ?e, "Error during sentence analysis");
                }
                AnalysisResult::failed(text, &e)
            }),
            Err(e) => {
                if self.config.should_log(LogLevel::Warn) {
                    warn!(reason = %e.reason(), message = %e, "Input validation failed");
                }
                AnalysisResult::failed(input.raw_text(), &e)
            }
        };

        result.processing_time = start.elapsed().as_secs_f64() * 1000.0;
        if self.config.should_log(LogLevel::Debug) && result.is_ok() && !result.from_cache {
            debug!(
                sentence_type = %result.sentence_type,
                complexity = %result.complexity,
                total_tenses = result.total_tense_matches(),
                processing_time = result.processing_time,
                "Analysis completed"
            );
        }
        result
    }

    fn analyze_text(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let normalized = normalize_text(text);

        if self.config.enable_cache {
            let cached = self.lock_cache()?.get(&normalized);
            if let Some(mut cached) = cached {
                if self.config.should_log(LogLevel::Debug) {
                    debug!(text = %preview(&normalized), "Cache hit");
                }
                cached.original_text = text.to_string();
                cached.from_cache = true;
                return Ok(cached);
            }
        }

        if self.config.should_log(LogLevel::Debug) {
            debug!(
                length = normalized.len(),
                text = %preview(&normalized),
                "Analyzing sentence"
            );
        }

        let lower = normalized.to_lowercase();
        let mut result = self.engine.scan(text, &lower)?;
        self.classifier.apply(&mut result);

        if self.config.enable_cache {
            self.lock_cache()?.set(normalized, result.clone());
        }
        Ok(result)
    }

    /// Cache counters, configuration snapshot, version and timestamp
    pub fn stats(&self) -> DetectorStats {
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats();
        DetectorStats {
            cache,
            config: self.config.clone(),
            version: VERSION,
            timestamp: Utc::now(),
        }
    }

    /// Drop all cached analyses; false if the cache could not be locked
    pub fn clear_cache(&self) -> bool {
        match self.cache.lock() {
            Ok(mut cache) => {
                cache.clear();
                if self.config.should_log(LogLevel::Info) {
                    info!("Cache cleared successfully");
                }
                true
            }
            Err(e) => {
                if self.config.should_log(LogLevel::Error) {
                    error!(error = %e, "Error clearing cache");
                }
                false
            }
        }
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, AnalysisCache>, AnalysisError> {
        self.cache
            .lock()
            .map_err(|e| AnalysisError::Analysis(format!("cache unavailable: {}", e)))
    }
}

impl Default for TenseDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

static DEFAULT_DETECTOR: Lazy<TenseDetector> =
    Lazy::new(|| TenseDetector::new(DetectorConfig::from_env()));

/// Process-wide detector, created on first use with `DetectorConfig::from_env`
pub fn default_detector() -> &'static TenseDetector {
    &DEFAULT_DETECTOR
}

/// Analyze a sentence with the process-wide detector
pub fn analyze_sentence<'a>(input: impl Into<TextInput<'a>>) -> AnalysisResult {
    default_detector().analyze(input)
}

/// Statistics of the process-wide detector
pub fn system_stats() -> DetectorStats {
    default_detector().stats()
}

/// Clear the process-wide detector's cache
pub fn clear_cache() -> bool {
    default_detector().clear_cache()
}
