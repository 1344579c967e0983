//! Modular arithmetic primitives for u64 moduli with u128 intermediates.
//!
//! Coordinates on the orbit curve can be negative (backward steps, negated
//! residues), so every reduction here is a floor remainder in [0, m), never
//! the truncating `%`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Floor remainder of a signed value: the unique r in [0, m) with x ≡ r (mod m).
pub fn modulo(x: i128, m: u64) -> u64 {
    assert!(m >= 1, "modulus must be positive");
    x.mod_floor(&(m as i128)) as u64
}

/// Floor remainder of an arbitrary-precision value, in [0, m).
pub fn modulo_big(x: &BigInt, m: u64) -> u64 {
    assert!(m >= 1, "modulus must be positive");
    x.mod_floor(&BigInt::from(m))
        .to_u64()
        .expect("remainder is below a u64 modulus")
}

/// Modular exponentiation: base^exp mod m using the binary method.
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let m = m as u128;
    let mut result = 1u128;
    let mut b = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        exp >>= 1;
        b = b * b % m;
    }
    result as u64
}

/// Modular inverse a^{-1} mod m via Fermat: a^(m-2) mod m.
///
/// Precondition: `m` is prime and does not divide `a`. Neither is checked;
/// for a composite modulus the result is meaningless. Callers in this
/// workspace only pass moduli drawn from [`crate::sieve_primes`].
pub fn mod_inverse(a: u64, m: u64) -> u64 {
    mod_pow(a, m.saturating_sub(2), m)
}

/// Euler's criterion: a is a quadratic residue mod the odd prime q iff
/// a^((q-1)/2) ≡ 1 (mod q). Zero counts as a residue.
pub fn is_quadratic_residue(a: i128, q: u64) -> bool {
    let a = modulo(a, q);
    if a == 0 {
        return true;
    }
    mod_pow(a, (q - 1) / 2, q) == 1
}
