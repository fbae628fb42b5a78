use seqlab::harness::{compare_splits, HarnessConfig};
use std::env;

/// Copy versus transfer split timings for both sequence kinds.
///
/// Usage: cargo run --release --example timer [reps]
fn main() {
    env_logger::init();

    let mut config = HarnessConfig::default();
    if let Some(arg) = env::args().nth(1) {
        let reps = arg.parse().unwrap_or_else(|_| {
            eprintln!("Invalid repetition count \"{}\".", arg);
            std::process::exit(1);
        });
        config = config.with_reps(reps);
    }

    println!("Copy vs Transfer Split (lightweight benchmark)");
    println!("Each timing is an average over {} ops.", config.reps);
    println!("Note: sub-100 ns timings are noisy; focus on trends.\n");

    let comparisons = compare_splits(&config).unwrap_or_else(|err| {
        eprintln!("Measurement failed: {}", err);
        std::process::exit(1);
    });

    for comparison in comparisons {
        println!("{}", comparison);
    }
}
