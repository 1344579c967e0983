//! Bounded prime generation and deterministic trial-division primality.

use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{Signed, ToPrimitive, Zero};

/// Sieve of Eratosthenes: all primes <= `max`, ascending.
///
/// Marking starts at i^2; smaller multiples were already crossed off by a
/// smaller prime factor.
pub fn sieve_primes(max: u64) -> Vec<u64> {
    if max < 2 {
        return Vec::new();
    }
    let limit = max as usize;
    let mut is_composite = vec![false; limit + 1];
    let mut primes = Vec::new();

    for i in 2..=limit {
        if is_composite[i] {
            continue;
        }
        primes.push(i as u64);
        if let Some(start) = i.checked_mul(i) {
            let mut j = start;
            while j <= limit {
                is_composite[j] = true;
                j += i;
            }
        }
    }

    primes
}

/// Trial division up to floor(sqrt(n)), odd divisors only after 2.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }

    let limit = n.sqrt();
    let mut d = 3u64;
    while d <= limit {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Trial-division primality for arbitrary-precision values.
///
/// Values that fit in a u64 take the fixed-width path. Beyond that the
/// cost grows with sqrt(n); orbit coordinates reach that range only for
/// long trajectories.
pub fn is_prime_big(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }
    if let Some(small) = n.to_u64() {
        return is_prime(small);
    }
    if n.is_even() {
        return false;
    }

    let limit = Roots::sqrt(n);
    let mut d = BigInt::from(3u8);
    while d <= limit {
        if (n % &d).is_zero() {
            return false;
        }
        d += 2u8;
    }
    true
}
