//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jobsfeed_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jobsfeed_core::{JobDirectory, MockDirectory};

fn main() {
    println!("jobsfeed_core version={}", jobsfeed_core::core_version());

    match MockDirectory::seeded().and_then(|directory| directory.list_jobs()) {
        Ok(jobs) => println!("jobsfeed_core seeded_jobs={}", jobs.len()),
        Err(err) => {
            eprintln!("jobsfeed_core seed_error={err}");
            std::process::exit(1);
        }
    }
}
