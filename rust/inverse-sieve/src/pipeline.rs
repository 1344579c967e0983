//! The sieve orchestrator: for every prime z ≡ 1 (mod 12) up to the ceiling,
//! walk each canonical seed's orbit and keep the candidates that pass
//!
//! - the equation filter   p^2 - 12n^2 == z,
//! - the local norm sieve  p ≡ ±2tn (mod z),
//! - the disturbance filter (composite p only).

use serde::Serialize;
use std::io::Write;
use std::time::Instant;

use sieve_core::{is_prime_big, sieve_primes};

use crate::config::SieveConfig;
use crate::disturbance::{is_disturbed, select_disturbance_primes};
use crate::error::Result;
use crate::orbit::OrbitPoint;
use crate::output::{SurfacePoint, Survivor, SurvivorWriter};
use crate::residue::{check_local_sieve, find_t};
use crate::seeds::find_canonical_seeds;

/// Outcome of every filter for one orbit candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub equation_ok: bool,
    pub local_ok: bool,
    pub p_is_prime: bool,
    pub disturbed: bool,
}

impl Verdict {
    pub fn survives(&self) -> bool {
        self.equation_ok && self.local_ok && !self.disturbed
    }
}

pub fn evaluate_candidate(point: &OrbitPoint, z: u64, t: u64, disturbance: &[u64]) -> Verdict {
    let p_is_prime = is_prime_big(&point.p);
    Verdict {
        equation_ok: point.lies_on(z),
        local_ok: check_local_sieve(&point.p, &point.n, z, t),
        p_is_prime,
        disturbed: is_disturbed(&point.p, p_is_prime, disturbance),
    }
}

/// What happened to one z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZOutcome {
    Sieved,
    /// 3 is not a square mod z.
    NoSquareRoot,
    /// No solution with 1 <= n <= n_search_max.
    NoSeeds,
}

/// Per-z statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZReport {
    pub z: u64,
    pub outcome: ZOutcome,
    pub t: Option<u64>,
    pub disturbance_primes: usize,
    pub seeds: usize,
    pub candidates: usize,
    pub survivors: usize,
    pub prime_survivors: usize,
    pub composite_survivors: usize,
    pub disturbance_rejections: usize,
}

impl ZReport {
    fn skipped(z: u64, outcome: ZOutcome, t: Option<u64>) -> Self {
        ZReport {
            z,
            outcome,
            t,
            disturbance_primes: 0,
            seeds: 0,
            candidates: 0,
            survivors: 0,
            prime_survivors: 0,
            composite_survivors: 0,
            disturbance_rejections: 0,
        }
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub config: SieveConfig,
    pub z_reports: Vec<ZReport>,
    pub z_tested: usize,
    pub z_skipped: usize,
    pub total_candidates: usize,
    pub total_survivors: usize,
    pub total_prime_survivors: usize,
    pub wall_seconds: f64,
}

/// Sieve a single z. Survivors go to `emit` in (seed index, k) order.
pub fn sieve_z<F>(
    z: u64,
    config: &SieveConfig,
    q_primes: &[u64],
    mut emit: F,
) -> Result<ZReport>
where
    F: FnMut(Survivor) -> Result<()>,
{
    let t = match find_t(z) {
        Some(t) => t,
        None => {
            log::warn!("z={}: no t with t^2 ≡ 3 (mod {}), skipping", z, z);
            return Ok(ZReport::skipped(z, ZOutcome::NoSquareRoot, None));
        }
    };

    let disturbance = select_disturbance_primes(z, q_primes);
    log::debug!("z={}: disturbance primes {:?}", z, disturbance);

    let seeds = find_canonical_seeds(z, config.n_search_max);
    if seeds.is_empty() {
        log::warn!(
            "z={}: no seeds with 1 <= n <= {}, skipping",
            z,
            config.n_search_max
        );
        let mut report = ZReport::skipped(z, ZOutcome::NoSeeds, Some(t));
        report.disturbance_primes = disturbance.len();
        return Ok(report);
    }
    log::info!(
        "z={}: t={}, {} disturbance primes, {} canonical seeds",
        z,
        t,
        disturbance.len(),
        seeds.len()
    );

    let mut report = ZReport {
        disturbance_primes: disturbance.len(),
        seeds: seeds.len(),
        ..ZReport::skipped(z, ZOutcome::Sieved, Some(t))
    };

    for (seed_index, seed) in seeds.iter().enumerate() {
        log::debug!("z={}: seed {} = {}", z, seed_index, seed);

        for (k, point) in (0u32..).zip(seed.trajectory(config.steps_per_seed)) {
            let verdict = evaluate_candidate(&point, z, t, &disturbance);
            report.candidates += 1;
            if verdict.disturbed {
                report.disturbance_rejections += 1;
            }
            if !verdict.survives() {
                continue;
            }

            report.survivors += 1;
            if verdict.p_is_prime {
                report.prime_survivors += 1;
            } else {
                report.composite_survivors += 1;
            }
            emit(Survivor {
                z,
                seed_index,
                k,
                p: point.p,
                n: point.n,
                is_p_prime: verdict.p_is_prime,
            })?;
        }
    }

    Ok(report)
}

/// Run the sieve over every prime z ≡ 1 (mod 12) with z <= z_max.
///
/// Each survivor is written to `survivors` as soon as it is found and
/// appended to `surface`, in the same order.
pub fn run_sieve<W: Write>(
    config: &SieveConfig,
    survivors: &mut SurvivorWriter<W>,
    surface: &mut Vec<SurfacePoint>,
) -> Result<RunReport> {
    let start = Instant::now();
    let q_primes = sieve_primes(config.disturbance_q_max);

    let mut z_reports = Vec::new();
    for z in sieve_primes(config.z_max) {
        if z % 12 != 1 {
            continue;
        }
        let report = sieve_z(z, config, &q_primes, |survivor| {
            survivors.write(&survivor)?;
            surface.push(survivor.surface_point());
            Ok(())
        })?;
        z_reports.push(report);
    }

    let z_skipped = z_reports
        .iter()
        .filter(|r| r.outcome != ZOutcome::Sieved)
        .count();
    Ok(RunReport {
        config: config.clone(),
        z_tested: z_reports.len(),
        z_skipped,
        total_candidates: z_reports.iter().map(|r| r.candidates).sum(),
        total_survivors: z_reports.iter().map(|r| r.survivors).sum(),
        total_prime_survivors: z_reports.iter().map(|r| r.prime_survivors).sum(),
        wall_seconds: start.elapsed().as_secs_f64(),
        z_reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn small_config(steps: u32) -> SieveConfig {
        SieveConfig {
            z_max: 20,
            n_search_max: 10,
            steps_per_seed: steps,
            disturbance_q_max: 20,
            ..SieveConfig::default()
        }
    }

    fn collect_z(z: u64, config: &SieveConfig) -> (ZReport, Vec<Survivor>) {
        let mut found = Vec::new();
        let report = sieve_z(z, config, &sieve_primes(config.disturbance_q_max), |s| {
            found.push(s);
            Ok(())
        })
        .unwrap();
        (report, found)
    }

    #[test]
    fn test_verdict_prime_survivor() {
        let v = evaluate_candidate(&OrbitPoint::new(821, 237), 13, 4, &[5, 11]);
        assert!(v.equation_ok && v.local_ok && v.p_is_prime && !v.disturbed);
        assert!(v.survives());
    }

    #[test]
    fn test_verdict_disturbed_composite() {
        // Third forward step of (5, 1): 11435 = 5 * 2287
        let point = OrbitPoint::new(11435, 3301);
        assert!(point.lies_on(13));
        let v = evaluate_candidate(&point, 13, 4, &[5, 11]);
        assert!(v.equation_ok && v.local_ok);
        assert!(!v.p_is_prime);
        assert!(v.disturbed);
        assert!(!v.survives());

        // Without disturbance primes the composite survives
        assert!(evaluate_candidate(&point, 13, 4, &[]).survives());
    }

    #[test]
    fn test_verdict_off_curve() {
        let v = evaluate_candidate(&OrbitPoint::new(7, 1), 13, 4, &[5, 11]);
        assert!(!v.equation_ok);
        assert!(!v.survives());
    }

    #[test]
    fn test_sieve_z13_three_steps() {
        let (report, survivors) = collect_z(13, &small_config(3));
        assert_eq!(report.outcome, ZOutcome::Sieved);
        assert_eq!(report.t, Some(4));
        assert_eq!(report.seeds, 2);
        assert_eq!(report.disturbance_primes, 2);
        assert_eq!(report.candidates, 6);

        let rows: Vec<(usize, u32, i64, i64)> = survivors
            .iter()
            .map(|s| (s.seed_index, s.k, s.p.to_i64().unwrap(), s.n.to_i64().unwrap()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (0, 0, 5, 1),
                (0, 1, 59, 17),
                (0, 2, 821, 237),
                (1, 0, 5, -1),
                (1, 1, 11, 3),
                (1, 2, 149, 43),
            ]
        );
        assert!(survivors.iter().all(|s| s.is_p_prime));
    }

    #[test]
    fn test_sieve_z13_fourth_step_rejected() {
        // k = 3 gives 11435 = 5 * 2287 and 2075 = 5^2 * 83
        let (report, survivors) = collect_z(13, &small_config(4));
        assert_eq!(report.candidates, 8);
        assert_eq!(report.survivors, 6);
        assert_eq!(report.disturbance_rejections, 2);
        assert!(survivors.iter().all(|s| s.k < 3));
    }

    #[test]
    fn test_sieve_z_without_seeds() {
        let config = SieveConfig {
            n_search_max: 0,
            ..small_config(3)
        };
        let (report, survivors) = collect_z(13, &config);
        assert_eq!(report.outcome, ZOutcome::NoSeeds);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_sieve_z_without_square_root() {
        let (report, survivors) = collect_z(7, &small_config(3));
        assert_eq!(report.outcome, ZOutcome::NoSquareRoot);
        assert_eq!(report.t, None);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_run_sieve_surface_matches_survivors() {
        let config = small_config(3);
        let mut writer = SurvivorWriter::new(Vec::new(), "<memory>").unwrap();
        let mut surface = Vec::new();
        let report = run_sieve(&config, &mut writer, &mut surface).unwrap();

        assert_eq!(report.z_tested, 1);
        assert_eq!(report.z_reports[0].z, 13);
        assert_eq!(report.total_survivors, 6);
        assert_eq!(surface.len(), 6);
        assert_eq!(writer.rows(), 6);
        assert_eq!(surface[0].to_row(), "5;1;13");
        assert_eq!(surface[5].to_row(), "149;43;13");
    }
}
