//! End-to-end runs of the inverse sieve against real output files.

use inverse_sieve::audit::audit_survivor;
use inverse_sieve::disturbance::disturbance_primes;
use inverse_sieve::output::{SURFACE_HEADER, SURVIVORS_HEADER};
use inverse_sieve::residue::find_t;
use inverse_sieve::{run, run_with_writers, SieveConfig, Survivor, ZOutcome};
use num_bigint::BigInt;

/// Parse one survivors row back into a record.
fn parse_survivor(row: &str) -> Survivor {
    let fields: Vec<&str> = row.split(';').collect();
    assert_eq!(fields.len(), 6, "malformed row {:?}", row);
    Survivor {
        z: fields[0].parse().unwrap(),
        seed_index: fields[1].parse().unwrap(),
        k: fields[2].parse().unwrap(),
        p: fields[3].parse::<BigInt>().unwrap(),
        n: fields[4].parse::<BigInt>().unwrap(),
        is_p_prime: fields[5].parse().unwrap(),
    }
}

fn small_config(dir: &std::path::Path) -> SieveConfig {
    SieveConfig {
        z_max: 20,
        n_search_max: 10,
        steps_per_seed: 3,
        disturbance_q_max: 20,
        survivors_path: dir.join("survivors.csv"),
        surface_path: dir.join("surface.csv"),
    }
}

#[test]
fn test_small_run_writes_both_streams() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());
    let report = run(&config).unwrap();

    // Only z = 13 is prime and ≡ 1 (mod 12) below 20
    assert_eq!(report.z_tested, 1);
    assert_eq!(report.z_reports[0].z, 13);
    assert_eq!(report.z_reports[0].outcome, ZOutcome::Sieved);

    let survivors = std::fs::read_to_string(&config.survivors_path).unwrap();
    let mut lines = survivors.lines();
    assert_eq!(lines.next(), Some(SURVIVORS_HEADER));
    let records: Vec<Survivor> = lines.map(parse_survivor).collect();
    assert!(!records.is_empty());
    assert_eq!(records.len(), report.total_survivors);

    let t = find_t(13).unwrap();
    let qs = disturbance_primes(13, 20);
    for record in &records {
        assert!(
            audit_survivor(record, t, &qs).is_empty(),
            "bad survivor {:?}",
            record
        );
    }

    let surface = std::fs::read_to_string(&config.surface_path).unwrap();
    let mut lines = surface.lines();
    assert_eq!(lines.next(), Some(SURFACE_HEADER));
    let points: Vec<String> = lines.map(str::to_string).collect();
    let expected: Vec<String> = records
        .iter()
        .map(|r| format!("{};{};{}", r.p, r.n, r.z))
        .collect();
    assert_eq!(points, expected);
}

#[test]
fn test_medium_run_survivors_pass_audit() {
    let config = SieveConfig {
        z_max: 200,
        n_search_max: 200,
        steps_per_seed: 6,
        disturbance_q_max: 200,
        ..SieveConfig::default()
    };
    let (report, survivors, _surface) = run_with_writers(&config, Vec::new(), Vec::new()).unwrap();

    // 13, 37, 61, 73, 97, 109, 157, 181, 193
    let tested: Vec<u64> = report.z_reports.iter().map(|r| r.z).collect();
    assert_eq!(tested, vec![13, 37, 61, 73, 97, 109, 157, 181, 193]);
    assert!(report
        .z_reports
        .iter()
        .all(|r| r.outcome != ZOutcome::NoSquareRoot));

    let text = String::from_utf8(survivors).unwrap();
    let records: Vec<Survivor> = text.lines().skip(1).map(parse_survivor).collect();
    assert_eq!(records.len(), report.total_survivors);

    for record in &records {
        let t = find_t(record.z).unwrap();
        let qs = disturbance_primes(record.z, config.disturbance_q_max);
        assert!(audit_survivor(record, t, &qs).is_empty(), "{:?}", record);
    }

    // Discovery order: z ascending, then seed index, then k
    let keys: Vec<(u64, usize, u32)> = records.iter().map(|r| (r.z, r.seed_index, r.k)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_runs_are_deterministic() {
    let config = SieveConfig {
        z_max: 100,
        n_search_max: 100,
        steps_per_seed: 5,
        disturbance_q_max: 100,
        ..SieveConfig::default()
    };
    let (_, a_survivors, a_surface) = run_with_writers(&config, Vec::new(), Vec::new()).unwrap();
    let (_, b_survivors, b_surface) = run_with_writers(&config, Vec::new(), Vec::new()).unwrap();
    assert_eq!(a_survivors, b_survivors);
    assert_eq!(a_surface, b_surface);
}

#[test]
fn test_zero_steps_gives_headers_only() {
    let config = SieveConfig {
        steps_per_seed: 0,
        ..small_config(std::path::Path::new("."))
    };
    let (report, survivors, surface) = run_with_writers(&config, Vec::new(), Vec::new()).unwrap();
    assert_eq!(report.total_survivors, 0);
    assert_eq!(String::from_utf8(survivors).unwrap(), "z;seedIndex;k;p;n;isPPrime\n");
    assert_eq!(String::from_utf8(surface).unwrap(), "p1;n;z\n");
}

#[test]
fn test_unwritable_output_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_config(dir.path());
    config.survivors_path = dir.path().join("no-such-dir").join("survivors.csv");
    assert!(run(&config).is_err());
    assert!(!config.surface_path.exists());
}
