//! Generational loop with random controllers.
//!
//! Demonstrates: build config → run_generation per generation → read
//! per-agent fitness → hand it to an optimizer (here, just printed).
//!
//! Run with `RUST_LOG=info` to see wins as they happen.

use mazerun_bench::{reference_profile, RandomController};
use mazerun_core::GenerationId;
use mazerun_engine::run_generation;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Mazerun Random Walk Example ===\n");

    let config = reference_profile(42);
    let mut generation = GenerationId(0);

    for _ in 0..5 {
        let mut controller = RandomController::new(generation.0);
        let report = match run_generation(&config, generation, &mut controller) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("generation {generation} failed: {e}");
                std::process::exit(1);
            }
        };

        let fitness = report.fitness();
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        let best = report.best().map_or(f64::NAN, |r| r.fitness);
        println!(
            "generation {generation}: ticks={} winners={} best={best:.1} mean={mean:.1} \
             blocked={}/{} ({:.1} ms)",
            report.ticks,
            report.winners(),
            report.metrics.blocked_moves,
            report.metrics.moves + report.metrics.blocked_moves,
            report.metrics.total_us as f64 / 1000.0,
        );

        generation = generation.next();
    }
}
