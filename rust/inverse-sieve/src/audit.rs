//! Independent re-check of survivor records.

use num_traits::Zero;
use sieve_core::is_prime_big;
use std::fmt;

use crate::orbit::OrbitPoint;
use crate::output::Survivor;
use crate::residue::check_local_sieve;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// p^2 - 12n^2 != z
    OffCurve,
    /// p is not ≡ ±2tn (mod z)
    LocalSieve,
    /// Composite p divisible by a disturbance prime.
    Disturbed(u64),
    /// The recorded primality flag disagrees with trial division.
    PrimalityFlag,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OffCurve => write!(f, "p^2 - 12n^2 != z"),
            Violation::LocalSieve => write!(f, "p not ≡ ±2tn (mod z)"),
            Violation::Disturbed(q) => write!(f, "composite p divisible by disturbance prime {}", q),
            Violation::PrimalityFlag => write!(f, "isPPrime flag is wrong"),
        }
    }
}

/// Every property the record breaks; empty for a valid survivor.
pub fn audit_survivor(survivor: &Survivor, t: u64, disturbance: &[u64]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let point = OrbitPoint {
        p: survivor.p.clone(),
        n: survivor.n.clone(),
    };

    if !point.lies_on(survivor.z) {
        violations.push(Violation::OffCurve);
    }
    if !check_local_sieve(&survivor.p, &survivor.n, survivor.z, t) {
        violations.push(Violation::LocalSieve);
    }

    let p_is_prime = is_prime_big(&survivor.p);
    if p_is_prime != survivor.is_p_prime {
        violations.push(Violation::PrimalityFlag);
    }
    if !p_is_prime {
        if let Some(&q) = disturbance.iter().find(|&&q| (&survivor.p % q).is_zero()) {
            violations.push(Violation::Disturbed(q));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn record(p: i64, n: i64, is_p_prime: bool) -> Survivor {
        Survivor {
            z: 13,
            seed_index: 0,
            k: 0,
            p: BigInt::from(p),
            n: BigInt::from(n),
            is_p_prime,
        }
    }

    #[test]
    fn test_valid_survivor() {
        assert!(audit_survivor(&record(821, 237, true), 4, &[5, 11]).is_empty());
    }

    #[test]
    fn test_detects_each_violation() {
        assert_eq!(
            audit_survivor(&record(11435, 3301, false), 4, &[5, 11]),
            vec![Violation::Disturbed(5)]
        );
        assert_eq!(
            audit_survivor(&record(59, 17, false), 4, &[]),
            vec![Violation::PrimalityFlag]
        );
        // (6, 1): off the curve and 6 is neither 8 nor 5 mod 13
        assert_eq!(
            audit_survivor(&record(6, 1, false), 4, &[]),
            vec![Violation::OffCurve, Violation::LocalSieve]
        );
    }
}
