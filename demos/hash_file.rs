//! File hashing example.
//!
//! Run with:
//!     cargo run --example hash_file -- /path/to/file

use std::env;

use disksum::{FileSource, PlanConfig, Planner, StreamHasher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let total_len = std::fs::metadata(&path)?.len();
    println!("Hashing file: {} ({} bytes)\n", path, total_len);

    // Small max block size so the plan shows its halving structure
    let config = PlanConfig::new(4096)?;

    let plan = Planner::new(config).plan(total_len)?;
    println!("Read plan ({} runs):", plan.len());
    for run in &plan {
        println!("  {}", run);
    }

    let mut source = FileSource::open(&path)?;
    let digest = StreamHasher::new(config).digest_plan(&plan, &mut source)?;

    println!("\nSHA-256: {}", digest);
    Ok(())
}
