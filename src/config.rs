// Tense Detector Configuration
// Fixed constants with optional environment overrides

use crate::cache::CACHE_SIZE;
use crate::validator::MAX_TEXT_LENGTH;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "unknown log level '{}': expected debug, info, warn or error",
                other
            )),
        }
    }
}

/// Detector settings, snapshotted when a detector is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectorConfig {
    /// Maximum accepted input length in characters
    pub max_text_length: usize,
    /// Number of cached analyses
    pub cache_size: usize,
    /// Disable to analyze every call from scratch
    pub enable_cache: bool,
    /// Lowest level the detector and validator emit; applied at each call
    /// site, independent of the installed subscriber
    pub log_level: LogLevel,
    /// Suppresses debug events
    pub performance_mode: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            cache_size: CACHE_SIZE,
            enable_cache: true,
            log_level: LogLevel::default(),
            performance_mode: false,
        }
    }
}

impl DetectorConfig {
    /// Defaults with environment overrides
    ///
    /// - `TENSE_DETECTOR_LOG_LEVEL` (or `LOG_LEVEL`) sets the log level;
    ///   unparseable values are ignored
    /// - `TENSE_DETECTOR_ENV=production` turns on performance mode
    pub fn from_env() -> Self {
        let level = std::env::var("TENSE_DETECTOR_LOG_LEVEL")
            .or_else(|_| std::env::var("LOG_LEVEL"))
            .ok();
        let env = std::env::var("TENSE_DETECTOR_ENV").ok();
        Self::default().with_overrides(level.as_deref(), env.as_deref())
    }

    fn with_overrides(mut self, level: Option<&str>, env: Option<&str>) -> Self {
        if let Some(level) = level.and_then(|l| l.parse().ok()) {
            self.log_level = level;
        }
        if env.is_some_and(|e| e.eq_ignore_ascii_case("production")) {
            self.performance_mode = true;
        }
        self
    }

    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    pub fn with_cache_enabled(mut self, enable_cache: bool) -> Self {
        self.enable_cache = enable_cache;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_performance_mode(mut self, performance_mode: bool) -> Self {
        self.performance_mode = performance_mode;
        self
    }

    /// Lowest level the detector emits: performance mode lifts `debug` to `info`
    pub fn min_log_level(&self) -> LogLevel {
        if self.performance_mode && self.log_level == LogLevel::Debug {
            LogLevel::Info
        } else {
            self.log_level
        }
    }

    /// Filter directive for the CLI subscriber
    pub fn log_filter(&self) -> &'static str {
        self.min_log_level().as_filter()
    }

    /// Whether the detector emits events at `level`
    pub fn should_log(&self, level: LogLevel) -> bool {
        level >= self.min_log_level()
    }
}
