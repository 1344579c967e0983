//! Canonical seeds: solutions of p^2 - 12n^2 = z reduced to the innermost
//! point of their orbit.
//!
//! 1. Inverse search: for 1 <= n <= n_max, z + 12n^2 is tested for being a
//!    perfect square with an exact integer square root.
//! 2. Each raw solution is walked backwards while the previous point keeps
//!    p > 0, stays on the curve, and has strictly smaller |p|.
//! 3. Reduced points are deduplicated, keeping first-seen order.

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{Signed, Zero};
use std::collections::HashSet;

use crate::orbit::OrbitPoint;

/// All (p, n) with p > 0, 1 <= n <= n_max and p^2 - 12n^2 = z, ascending in n.
pub fn find_raw_solutions(z: u64, n_max: u64) -> Vec<OrbitPoint> {
    let z_big = BigInt::from(z);
    (1..=n_max)
        .filter_map(|n| {
            let n = BigInt::from(n);
            let value = &z_big + 12i32 * &n * &n;
            let p = Roots::sqrt(&value);
            (&p * &p == value).then(|| OrbitPoint { p, n })
        })
        .collect()
}

/// Walk a solution backwards to its innermost point on the same curve.
///
/// Every accepted step strictly decreases a positive p, so the walk
/// terminates after fewer than p steps.
pub fn reduce_seed(point: &OrbitPoint, z: u64) -> OrbitPoint {
    let mut current = point.clone();
    let mut steps = 0usize;
    loop {
        let prev = current.backward();
        if prev.p <= BigInt::zero() {
            break;
        }
        if !prev.lies_on(z) {
            break;
        }
        if prev.p.abs() >= current.p.abs() {
            break;
        }
        current = prev;
        steps += 1;
    }
    if steps > 0 {
        log::debug!("z={}: reduced {} to {} in {} steps", z, point, current, steps);
    }
    current
}

/// Canonical, pairwise-distinct seeds for z in discovery order.
pub fn find_canonical_seeds(z: u64, n_max: u64) -> Vec<OrbitPoint> {
    let mut seen = HashSet::new();
    let mut seeds = Vec::new();

    for raw in find_raw_solutions(z, n_max) {
        let reduced = reduce_seed(&raw, z);
        if seen.insert(reduced.clone()) {
            seeds.push(reduced);
        }
    }

    seeds
}
