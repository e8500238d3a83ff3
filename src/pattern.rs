// Tense Detector Pattern Table
// Builds the fixed regex table and extracts de-duplicated matches

use crate::data::{IRREGULAR_PAST_VERBS, MODAL_AUXILIARIES, NEGATABLE_AUXILIARIES};
use crate::types::{AnalysisError, Connector, TenseCategory};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Compiled category patterns, built once on first use
static CATEGORY_PATTERNS: Lazy<FxHashMap<TenseCategory, Result<Regex, regex::Error>>> =
    Lazy::new(|| {
        TenseCategory::ALL
            .iter()
            .map(|c| (*c, Regex::new(&category_pattern(*c))))
            .collect()
    });

/// Compiled connector patterns, built once on first use
static CONNECTOR_PATTERNS: Lazy<FxHashMap<Connector, Result<Regex, regex::Error>>> =
    Lazy::new(|| {
        Connector::ALL
            .iter()
            .map(|c| (*c, Regex::new(&connector_pattern(*c))))
            .collect()
    });

/// Regex source for a category
///
/// All patterns are case-insensitive. They run against lower-cased text,
/// so the flag only matters for callers matching raw input.
///
/// Unicode is switched off: `\w`, `\b` and `\s` are ASCII-only, so an
/// accented letter next to a verb form acts as a word boundary.
///
/// # Examples
/// ```
/// # use tense_detector::pattern::category_pattern;
/// # use tense_detector::TenseCategory;
/// let source = category_pattern(TenseCategory::PastPerfectContinuous);
/// assert_eq!(source, r"(?i-u)\bhad\s+been\s+\w+ing\b");
/// ```
pub fn category_pattern(category: TenseCategory) -> String {
    let body = match category {
        TenseCategory::PresentContinuous => r"\b(am|is|are)\s+\w+ing\b".to_string(),
        TenseCategory::PastContinuous => r"\b(was|were)\s+\w+ing\b".to_string(),
        TenseCategory::PastContinuousNegative => r"\b(wasn't|weren't)\s+\w+ing\b".to_string(),
        TenseCategory::PastContinuousInterrogative => {
            r"\b(was|were)\s+\w+\s+\w+ing\??\b".to_string()
        }
        TenseCategory::FutureContinuous => r"\bwill\s+be\s+\w+ing\b".to_string(),
        TenseCategory::PresentPerfectContinuous => r"\b(has|have)\s+been\s+\w+ing\b".to_string(),
        TenseCategory::PastPerfectContinuous => r"\bhad\s+been\s+\w+ing\b".to_string(),
        TenseCategory::SimplePastPositive => {
            format!(r"\b({})\b", IRREGULAR_PAST_VERBS.join("|"))
        }
        TenseCategory::SimplePastNegative => r"\bdidn't\s+\w+\b".to_string(),
        TenseCategory::SimplePastInterrogative => r"\bdid\s+\w+\s+\w+\??\b".to_string(),
        TenseCategory::Modal => {
            format!(r"\b({})\s+be\s+\w+ing\b", MODAL_AUXILIARIES.join("|"))
        }
        TenseCategory::NegativeContinuous => {
            format!(r"\b({})\s+not\s+\w+ing\b", NEGATABLE_AUXILIARIES.join("|"))
        }
    };
    format!("(?i-u){}", body)
}

/// Regex source for a connector
pub fn connector_pattern(connector: Connector) -> String {
    let body = match connector {
        Connector::AsSoonAs => r"\bas\s+soon\s+as\b".to_string(),
        other => format!(r"\b{}\b", other.as_str()),
    };
    format!("(?i-u){}", body)
}

fn category_regex(category: TenseCategory) -> Result<&'static Regex, AnalysisError> {
    match CATEGORY_PATTERNS.get(&category) {
        Some(Ok(re)) => Ok(re),
        Some(Err(e)) => Err(AnalysisError::Analysis(format!(
            "pattern for {} failed to compile: {}",
            category, e
        ))),
        None => Err(AnalysisError::Analysis(format!(
            "no pattern registered for {}",
            category
        ))),
    }
}

fn connector_regex(connector: Connector) -> Result<&'static Regex, AnalysisError> {
    match CONNECTOR_PATTERNS.get(&connector) {
        Some(Ok(re)) => Ok(re),
        Some(Err(e)) => Err(AnalysisError::Analysis(format!(
            "pattern for '{}' failed to compile: {}",
            connector, e
        ))),
        None => Err(AnalysisError::Analysis(format!(
            "no pattern registered for '{}'",
            connector
        ))),
    }
}

/// Collect every non-overlapping match of a category
///
/// Matches are lower-cased and de-duplicated, keeping first-seen order.
/// Each call drives its own iterator; no position is shared between calls.
///
/// # Examples
/// ```
/// # use tense_detector::pattern::find_matches;
/// # use tense_detector::TenseCategory;
/// let found =
///     find_matches(TenseCategory::PresentContinuous, "i am reading and she is reading").unwrap();
/// assert_eq!(found, vec!["am reading", "is reading"]);
/// ```
pub fn find_matches(category: TenseCategory, text: &str) -> Result<Vec<String>, AnalysisError> {
    let re = category_regex(category)?;
    let mut found = Vec::new();
    for m in re.find_iter(text.as_bytes()) {
        // patterns only match ASCII, so spans always fall on char boundaries
        let span = text.get(m.range()).ok_or_else(|| {
            AnalysisError::Analysis(format!("{} match split a character", category))
        })?;
        found.push(span);
    }
    Ok(dedup_lowercase(found.into_iter()))
}

/// Whether a connector occurs anywhere in the text
pub fn has_connector(connector: Connector, text: &str) -> Result<bool, AnalysisError> {
    Ok(connector_regex(connector)?.is_match(text.as_bytes()))
}

/// Collapse whitespace runs to a single space and trim
///
/// # Examples
/// ```
/// # use tense_detector::pattern::normalize_text;
/// assert_eq!(normalize_text("  I am\t\treading \n"), "I am reading");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-case and de-duplicate, keeping first occurrence order
fn dedup_lowercase<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in items {
        let lower = item.to_lowercase();
        if seen.insert(lower.clone()) {
            out.push(lower);
        }
    }
    out
}
