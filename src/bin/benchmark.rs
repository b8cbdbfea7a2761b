//! Step throughput: serial vs rayon

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use synestia::domain::{DEFAULT_ALIVE_PROBABILITY, Grid};

fn benchmark(size: usize, iterations: u32, parallel: bool) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = match Grid::random(size, DEFAULT_ALIVE_PROBABILITY, &mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Cannot build {}x{} grid: {}", size, size, e);
            return f64::NAN;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        grid = if parallel { grid.step_parallel() } else { grid.step() };
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Step Benchmark ===\n");

    let sizes = [25, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, false);
        let parallel_ms = benchmark(size, iterations, true);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 1000 * 1000;
    let parallel_ms = benchmark(1000, iterations, true);
    println!(
        "\nParallel at 1000x1000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
