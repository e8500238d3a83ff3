// Tense Detector CLI Tool
// Command-line interface for analyzing English sentences

use clap::Parser;
use std::io::BufRead;
use tense_detector::{AnalysisResult, DetectorConfig, LogLevel, TenseCategory, TenseDetector};
use tracing_subscriber::EnvFilter;

/// Tense Detector - classify English verb tenses in a sentence
#[derive(Parser, Debug)]
#[command(name = "tense-detect")]
#[command(
    about = "Detect continuous and simple-past tenses in English sentences",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Sentences to analyze (reads one per line from stdin when omitted)
    #[arg(value_name = "SENTENCE")]
    sentences: Vec<String>,

    /// Print each result as JSON
    #[arg(short, long)]
    json: bool,

    /// Print detector statistics after the analysis
    #[arg(short, long)]
    stats: bool,

    /// Analyze every sentence from scratch
    #[arg(long)]
    no_cache: bool,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = DetectorConfig::from_env().with_cache_enabled(!args.no_cache);
    if let Some(level) = args.log_level {
        config = config.with_log_level(level);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let sentences = if args.sentences.is_empty() {
        read_stdin_lines()?
    } else {
        args.sentences.clone()
    };

    if args.verbose {
        println!("🔍 Analyzing {} sentence(s)...\n", sentences.len());
    }

    let detector = TenseDetector::new(config);

    for (idx, sentence) in sentences.iter().enumerate() {
        let result = detector.analyze(sentence);
        if args.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_result(idx + 1, &result, args.verbose);
        }
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&detector.stats())?);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>, std::io::Error> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn print_result(number: usize, result: &AnalysisResult, verbose: bool) {
    println!("{}. {}", number, result.original_text);

    if let (Some(reason), Some(message)) = (result.error, result.message.as_deref()) {
        println!("   ❌ {}: {}\n", reason, message);
        return;
    }

    let mut found_any = false;
    for category in TenseCategory::ALL {
        let matches = result.matches(category);
        if !matches.is_empty() {
            found_any = true;
            println!("   {:<28} {}", category.name(), matches.join(", "));
        }
    }
    if !found_any {
        println!("   No tense patterns found.");
    }

    if !result.connectors.is_empty() {
        println!("   {:<28} {}", "connectors", join_connectors(result));
    }

    println!(
        "   Type: {} | Complexity: {}",
        result.sentence_type, result.complexity
    );

    if verbose {
        let source = if result.from_cache { "cache" } else { "fresh" };
        println!("   ⏱  {:.3}ms ({})", result.processing_time, source);
    }
    println!();
}

fn join_connectors(result: &AnalysisResult) -> String {
    result
        .connectors
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tense_detector::Connector;

    #[test]
    fn test_join_connectors() {
        let mut result = AnalysisResult::new("x");
        result.connectors = vec![Connector::While, Connector::AsSoonAs];
        assert_eq!(join_connectors(&result), "while, as soon as");
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::parse_from(["tense-detect", "--json", "--log-level", "debug", "I am reading"]);
        assert!(args.json);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.sentences, vec!["I am reading"]);
    }
}
