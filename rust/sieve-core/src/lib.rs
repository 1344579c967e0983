//! Shared number-theoretic utilities for the inverse sieve experiments.
//!
//! - [`primes`]: bounded sieve of Eratosthenes and trial-division primality
//!   (fixed-width and arbitrary-precision).
//! - [`modular`]: floor remainder, modular exponentiation, Fermat inverse and
//!   Euler's criterion over u64 moduli.

pub mod modular;
pub mod primes;

pub use modular::{is_quadratic_residue, mod_inverse, mod_pow, modulo, modulo_big};
pub use primes::{is_prime, is_prime_big, sieve_primes};

// Re-export BigInt so downstream crates and tests agree on the version.
pub use num_bigint::BigInt;
