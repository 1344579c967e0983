//! inverse-sieve CLI: orbit sieve over p^2 - 12n^2 = z.
//!
//! Options:
//!   --z-max=<N>         Largest prime z tested (default: 1000)
//!   --n-max=<N>         Seed search bound on n (default: 1000)
//!   --steps=<N>         Orbit steps per seed (default: 10)
//!   --q-max=<N>         Disturbance prime bound (default: 1000)
//!   --survivors=<path>  Survivors table (default: inverse_sieve_survivors.csv)
//!   --surface=<path>    Surface table (default: surface_F.csv)
//!   --config=<path>     JSON config file, overridden by the flags above
//!   --json              Print the run report as JSON instead of a table
//!
//! Set RUST_LOG=info (or debug) for per-z and per-seed progress.

use inverse_sieve::{run, RunReport, SieveConfig, ZOutcome};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");

    let config = match SieveConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !json {
        print_banner(&config);
    }

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&report);
    }
}

fn print_banner(config: &SieveConfig) {
    println!("=== Inverse Sieve: canonical seeds, survivors only ===");
    println!(
        "z_max = {}, n_search_max = {}, steps_per_seed = {}, disturbance_q_max = {}",
        config.z_max, config.n_search_max, config.steps_per_seed, config.disturbance_q_max
    );
    println!("Survivors: {}", config.survivors_path.display());
    println!("Surface F: {}", config.surface_path.display());
    println!();
}

fn print_summary(report: &RunReport) {
    println!(
        "{:>8} {:>6} {:>6} {:>6} {:>10} {:>10} {:>8} {:>8}  {}",
        "z", "t", "q's", "seeds", "candidates", "survivors", "prime", "rejected", "status"
    );
    println!("{}", "-".repeat(84));

    for r in &report.z_reports {
        let t = r.t.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string());
        let status = match r.outcome {
            ZOutcome::Sieved => "ok",
            ZOutcome::NoSquareRoot => "skipped: no t",
            ZOutcome::NoSeeds => "skipped: no seeds",
        };
        println!(
            "{:>8} {:>6} {:>6} {:>6} {:>10} {:>10} {:>8} {:>8}  {}",
            r.z,
            t,
            r.disturbance_primes,
            r.seeds,
            r.candidates,
            r.survivors,
            r.prime_survivors,
            r.disturbance_rejections,
            status
        );
    }

    println!("\n{}", "=".repeat(84));
    println!("z tested:            {}", report.z_tested);
    println!("z skipped:           {}", report.z_skipped);
    println!("Candidates:          {}", report.total_candidates);
    println!("Survivors:           {}", report.total_survivors);
    println!("  with prime p:      {}", report.total_prime_survivors);
    println!(
        "  with composite p:  {}",
        report.total_survivors - report.total_prime_survivors
    );
    println!("Wall time:           {:.2}s", report.wall_seconds);
}
