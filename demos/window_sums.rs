//! Fixed Window Sums Example
//!
//! Demonstrates how to:
//! 1. Enumerate fixed windows with a custom step
//! 2. Compute incremental window sums and check them against direct scans
//! 3. Reduce every window to its max, average and uniqueness
//! 4. Flag windows of characters that contain a repeat
//!
//! Run with: `RUST_LOG=debug cargo run --example window_sums`

use tracing_subscriber::EnvFilter;
use window_analytics::{
    enumerate_windows, window_all_unique_flags, window_reduce, window_sums_naive, ReduceKind,
    RollingSum, SequenceView, WindowError,
};

fn main() -> Result<(), WindowError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    println!("📊 Fixed Window Sums Example\n");

    let data: Vec<i32> = vec![1, 3, 4, 5, 6, 7, 10, 12, 15];
    let view = SequenceView::from(&data);
    println!("🔢 Sequence: {:?}\n", data);

    let windows = enumerate_windows(view, 3, 2)?;
    println!(
        "🪟 Windows of {}, step {} ({} total):",
        windows.length(),
        windows.step(),
        windows.count()
    );
    for (window, slice) in windows.slices() {
        println!("   [{}..{}) {:?}", window.start(), window.end(), slice);
    }
    println!();

    println!("➕ Incremental sums:");
    let mut sums = Vec::new();
    for (window, sum) in RollingSum::new(view, 3)?.with_windows() {
        println!("   [{}..{}) = {}", window.start(), window.end(), sum);
        sums.push(sum);
    }
    let naive = window_sums_naive(view, 3)?;
    println!("   Direct-scan sums: {:?}", naive);
    println!("   ✓ Match: {}\n", sums == naive);

    for kind in [ReduceKind::Max, ReduceKind::Average, ReduceKind::AllUnique] {
        let results = window_reduce(view, 3, kind)?;
        let values: Vec<String> = results
            .iter()
            .map(|result| format!("{:?}", result.value))
            .collect();
        println!("📈 {:?}: {}", kind, values.join(", "));
    }

    let letters: Vec<char> = "abcabcbb".chars().collect();
    let flags = window_all_unique_flags(SequenceView::from(&letters), 3)?;
    println!("\n🔤 Windows of 3 over {:?}:", letters.iter().collect::<String>());
    for result in flags {
        let slice: String = letters[result.window.range()].iter().collect();
        let mark = if result.value { "✓" } else { "✗ repeat" };
        println!("   {} {}", slice, mark);
    }

    Ok(())
}
