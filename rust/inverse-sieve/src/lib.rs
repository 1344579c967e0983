//! Inverse sieve over the quadratic form p^2 - 12n^2 = z.
//!
//! For primes z ≡ 1 (mod 12), solutions (p, n) are grouped into orbits of
//! the unit 7 + 4√3. Each orbit is started from its canonical (innermost)
//! seed and walked forward a fixed number of steps; every point is passed
//! through the equation check, the local norm sieve p ≡ ±2tn (mod z) and
//! the disturbance-prime filter. Survivors are streamed to a delimited
//! table and collected onto the surface F, written after the run.

pub mod audit;
pub mod config;
pub mod disturbance;
pub mod error;
pub mod orbit;
pub mod output;
pub mod pipeline;
pub mod residue;
pub mod seeds;

use std::io::Write;
use std::path::Path;

pub use config::SieveConfig;
pub use error::{Result, SieveError};
pub use orbit::OrbitPoint;
pub use output::{SurfacePoint, Survivor, SurvivorWriter};
pub use pipeline::{RunReport, Verdict, ZOutcome, ZReport};

/// Run the full experiment against the file destinations in `config`.
pub fn run(config: &SieveConfig) -> Result<RunReport> {
    config.validate()?;
    let mut survivors = SurvivorWriter::create(&config.survivors_path)?;
    let mut surface = Vec::new();

    let report = pipeline::run_sieve(config, &mut survivors, &mut surface)?;
    survivors.finish()?;

    output::write_surface_file(&config.surface_path, &surface)?;
    log::info!(
        "wrote {} survivors to {} and {} surface points to {}",
        report.total_survivors,
        config.survivors_path.display(),
        surface.len(),
        config.surface_path.display()
    );
    Ok(report)
}

/// Run the experiment against caller-supplied writers instead of files.
/// Returns the report together with both writers.
pub fn run_with_writers<S: Write, F: Write>(
    config: &SieveConfig,
    survivors_out: S,
    surface_out: F,
) -> Result<(RunReport, S, F)> {
    let mut survivors = SurvivorWriter::new(survivors_out, "<survivors>")?;
    let mut surface = Vec::new();

    let report = pipeline::run_sieve(config, &mut survivors, &mut surface)?;
    let survivors_out = survivors.finish()?;
    let surface_out = output::write_surface(surface_out, Path::new("<surface>"), &surface)?;
    Ok((report, survivors_out, surface_out))
}
