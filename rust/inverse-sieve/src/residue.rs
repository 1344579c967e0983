//! Square roots of 3 modulo z and the local norm sieve p ≡ ±2tn (mod z).

use num_bigint::BigInt;
use sieve_core::modulo_big;

/// Smallest t in [1, z-1] with t^2 ≡ 3 (mod z), or `None` if 3 is a
/// non-residue. Linear scan; z is assumed prime and is not checked.
pub fn find_t(z: u64) -> Option<u64> {
    let target = 3 % z;
    (1..z).find(|&t| (t as u128 * t as u128 % z as u128) as u64 == target)
}

/// Local norm sieve: p ≡ 2tn or p ≡ -2tn (mod z).
pub fn check_local_sieve(p: &BigInt, n: &BigInt, z: u64, t: u64) -> bool {
    let z128 = z as u128;
    let p_mod = modulo_big(p, z);
    let n_mod = modulo_big(n, z) as u128;
    let two_t = (2 * t as u128) % z128;

    let rhs = (two_t * n_mod % z128) as u64;
    let rhs_neg = (z - rhs) % z;

    p_mod == rhs || p_mod == rhs_neg
}
