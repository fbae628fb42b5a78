use seqlab::harness::{measure_node_pairs, HarnessConfig};
use std::env;

/// Handle-based versus index-based splicing in the middle of a linked sequence.
///
/// Usage: cargo run --release --example node_pairs [reps]
fn main() {
    env_logger::init();

    let mut config = HarnessConfig::node_pair();
    if let Some(arg) = env::args().nth(1) {
        let reps = arg.parse().unwrap_or_else(|_| {
            eprintln!("Invalid repetition count \"{}\".", arg);
            std::process::exit(1);
        });
        config = config.with_reps(reps);
    }

    println!("Linked Sequence Benchmark: Node-Based vs Index-Based");
    println!(
        "Each timing is an average over {} add+remove pairs.\n",
        config.reps
    );

    let reports = measure_node_pairs(&config).unwrap_or_else(|err| {
        eprintln!("Measurement failed: {}", err);
        std::process::exit(1);
    });

    for report in reports {
        println!("{}", report);
    }
}
