//! Batch Query Example
//!
//! Demonstrates how to:
//! 1. Load batch settings from the environment
//! 2. Parse a batch of window queries from JSON
//! 3. Run them in parallel over one shared sequence
//!
//! Run with:
//!   `WINDOW_SEARCH_STRATEGY=naive RUST_LOG=window_analytics=debug cargo run --example batch_queries`

use tracing_subscriber::EnvFilter;
use window_analytics::{longest_unique_run_str, run_batch, BatchConfig, SequenceView, WindowQuery};

const QUERIES: &str = r#"[
    {"query": "enumerate_windows", "length": 2, "step": 3},
    {"query": "window_sums", "length": 3},
    {"query": "window_reduce", "length": 3, "kind": "min"},
    {"query": "minimal_window_at_least", "target": 7},
    {"query": "count_windows_below", "target": 7},
    {"query": "longest_unique_run"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    println!("🧮 Batch Query Example\n");

    let config = BatchConfig::from_env();
    println!("⚙️  Config: {:?}\n", config);

    let data: Vec<i32> = vec![2, 3, 1, 2, 4, 3, 2, 1];
    let queries: Vec<WindowQuery<i64>> = serde_json::from_str(QUERIES)?;
    println!("🔢 Sequence: {:?}", data);
    println!("📝 Queries: {}\n", queries.len());

    let results = run_batch(SequenceView::from(&data), &queries, &config);
    for (query, result) in queries.iter().zip(results.iter()) {
        match result {
            Ok(output) => println!("   ✓ {}: {}", query.name(), serde_json::to_string(output)?),
            Err(error) => println!("   ✗ {}: {}", query.name(), error),
        }
    }

    let text = "abcabcbb";
    let run = longest_unique_run_str(text);
    println!(
        "\n🔤 Longest unique run in {:?}: length {} starting at {}",
        text, run.length, run.start
    );

    Ok(())
}
