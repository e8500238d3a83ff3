// Performance benchmarks for tense detector analysis

use std::time::Instant;
use tense_detector::{DetectorConfig, TenseDetector};

const SENTENCES: &[&str] = &[
    "I am reading while she is cooking",
    "I was reading when she arrived",
    "They weren't listening until the bell rang",
    "Was she sleeping when you called?",
    "I will be waiting for you as soon as the train leaves",
    "She had been studying before the exam",
    "Did you see the movie after dinner?",
    "I cannot be working while you are not listening",
];

fn main() {
    println!("🏃 Tense Detector Performance Benchmarks\n");

    let detector = TenseDetector::default();

    // Warmup compiles the pattern tables
    let _ = detector.analyze("warm up the tables");

    bench_cold(&detector);
    bench_cached(&detector);
    bench_uncached_batch();
    bench_long_input(&detector);

    let stats = detector.stats().cache;
    println!("\n📊 Cache Statistics");
    println!("─────────────────────────");
    println!("  Hits: {}  Misses: {}  Evictions: {}", stats.hits, stats.misses, stats.evictions);
    println!("  Size: {}/{}  Hit rate: {}", stats.size, stats.max_size, stats.hit_rate);

    println!("\n✅ Benchmarks completed!");
}

fn bench_cold(detector: &TenseDetector) {
    println!("🧊 COLD ANALYSIS (cache miss)");
    println!("─────────────────────────────");

    for sentence in SENTENCES {
        let start = Instant::now();
        let result = detector.analyze(*sentence);
        let duration = start.elapsed();

        println!(
            "  {:<55} → {} tenses in {:.3}ms",
            sentence,
            result.total_tense_matches(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_cached(detector: &TenseDetector) {
    println!("⚡ CACHED ANALYSIS (cache hit)");
    println!("──────────────────────────────");

    for sentence in SENTENCES {
        let start = Instant::now();
        let result = detector.analyze(*sentence);
        let duration = start.elapsed();

        println!(
            "  {:<55} → cached={} in {:.3}ms",
            sentence,
            result.from_cache,
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_uncached_batch() {
    println!("📦 BATCH WITHOUT CACHE");
    println!("─────────────────────");

    let detector = TenseDetector::new(DetectorConfig::default().with_cache_enabled(false));
    let rounds = 100;

    let start = Instant::now();
    for _ in 0..rounds {
        for sentence in SENTENCES {
            let _ = detector.analyze(*sentence);
        }
    }
    let total = start.elapsed();
    let count = rounds * SENTENCES.len();

    println!(
        "  {} analyses in {:.3}ms ({:.4}ms avg)",
        count,
        total.as_secs_f64() * 1000.0,
        (total.as_secs_f64() / count as f64) * 1000.0
    );
    println!();
}

fn bench_long_input(detector: &TenseDetector) {
    println!("📏 NEAR-LIMIT INPUT");
    println!("───────────────────");

    let mut text = String::new();
    while text.len() + 40 < 5000 {
        text.push_str("she was cooking while I am reading. ");
    }

    let start = Instant::now();
    let result = detector.analyze(text.as_str());
    let duration = start.elapsed();

    println!(
        "  {} chars → {} tenses in {:.3}ms",
        text.len(),
        result.total_tense_matches(),
        duration.as_secs_f64() * 1000.0
    );
}
