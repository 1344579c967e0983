//! Disturbance primes: small primes q that are locally compatible with
//! p^2 - 12n^2 = z, i.e. -z * 12^{-1} is a square mod q.
//!
//! A composite orbit candidate with such a factor is discarded.

use num_bigint::BigInt;
use num_traits::Zero;
use sieve_core::{is_quadratic_residue, mod_inverse, sieve_primes};

/// All primes q <= q_max, q ∉ {2, 3, z}, with -z/12 a quadratic residue mod q.
pub fn disturbance_primes(z: u64, q_max: u64) -> Vec<u64> {
    select_disturbance_primes(z, &sieve_primes(q_max))
}

/// Same selection over a precomputed ascending prime list, so a run can
/// sieve once and reuse the list for every z.
pub fn select_disturbance_primes(z: u64, primes: &[u64]) -> Vec<u64> {
    primes
        .iter()
        .copied()
        .filter(|&q| q != 2 && q != 3 && q != z)
        .filter(|&q| {
            // q > 3 is prime, so 12 is invertible mod q
            let inv12 = mod_inverse(12, q) as u128;
            let z_mod = (z % q) as u128;
            let a = (q as u128 - z_mod * inv12 % q as u128) % q as u128;
            is_quadratic_residue(a as i128, q)
        })
        .collect()
}

/// Disturbance filter. Primes are never rejected; a composite `p` is
/// rejected if any disturbance prime divides it.
pub fn is_disturbed(p: &BigInt, p_is_prime: bool, disturbance: &[u64]) -> bool {
    if p_is_prime {
        return false;
    }
    disturbance.iter().any(|&q| (p % q).is_zero())
}
