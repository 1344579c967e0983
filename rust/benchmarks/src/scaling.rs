//! Scaling runs for the inverse sieve.
//!
//! Re-runs the full sieve with growing orbit length and z ceiling, keeping
//! survivors in memory, and reports time, survivor counts and the size of
//! the largest coordinate reached. Coordinates grow by about 3.8 bits
//! per step (log2 of 7 + 4√3).

use std::time::Instant;

use inverse_sieve::output::SurfacePoint;
use inverse_sieve::pipeline::run_sieve;
use inverse_sieve::{SieveConfig, SurvivorWriter};

struct ScalingPoint {
    z_max: u64,
    steps: u32,
    candidates: usize,
    survivors: usize,
    prime_survivors: usize,
    max_p_bits: u64,
    seconds: f64,
}

fn measure(z_max: u64, steps: u32) -> Result<ScalingPoint, inverse_sieve::SieveError> {
    let config = SieveConfig {
        z_max,
        n_search_max: 1000,
        steps_per_seed: steps,
        disturbance_q_max: 1000,
        ..SieveConfig::default()
    };

    let start = Instant::now();
    let mut writer = SurvivorWriter::new(std::io::sink(), "<sink>")?;
    let mut surface: Vec<SurfacePoint> = Vec::new();
    let report = run_sieve(&config, &mut writer, &mut surface)?;
    let seconds = start.elapsed().as_secs_f64();

    let max_p_bits = surface
        .iter()
        .map(|point| point.p1.bits())
        .max()
        .unwrap_or(0);

    Ok(ScalingPoint {
        z_max,
        steps,
        candidates: report.total_candidates,
        survivors: report.total_survivors,
        prime_survivors: report.total_prime_survivors,
        max_p_bits,
        seconds,
    })
}

fn main() {
    println!("================================================================");
    println!("  SCALING: inverse sieve cost vs z ceiling and orbit length");
    println!("================================================================\n");

    println!(
        "{:>8} {:>6} {:>11} {:>10} {:>8} {:>8} {:>10}",
        "z_max", "steps", "candidates", "survivors", "prime", "p bits", "time(s)"
    );
    println!("{}", "-".repeat(68));

    for &z_max in &[200u64, 1000] {
        for &steps in &[2u32, 4, 6, 8, 10] {
            match measure(z_max, steps) {
                Ok(point) => println!(
                    "{:>8} {:>6} {:>11} {:>10} {:>8} {:>8} {:>10.3}",
                    point.z_max,
                    point.steps,
                    point.candidates,
                    point.survivors,
                    point.prime_survivors,
                    point.max_p_bits,
                    point.seconds
                ),
                Err(e) => {
                    eprintln!("z_max={} steps={}: {}", z_max, steps, e);
                    std::process::exit(1);
                }
            }
        }
    }
}
