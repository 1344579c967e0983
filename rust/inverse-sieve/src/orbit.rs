//! Orbits on the curve p^2 - 12n^2 = z.
//!
//! Writing a point as p + 2n√3, the forward step multiplies by the unit
//! ε² = 7 + 4√3 (norm 1), so the norm z is preserved exactly:
//!
//!   p' = 7p + 24n,   n' = 2p + 7n
//!
//! The backward step multiplies by 7 - 4√3:
//!
//!   p_prev = 7p - 24n,   n_prev = -2p + 7n

use num_bigint::BigInt;
use std::fmt;

/// A lattice point (p, n), the state of an orbit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrbitPoint {
    pub p: BigInt,
    pub n: BigInt,
}

impl OrbitPoint {
    pub fn new(p: impl Into<BigInt>, n: impl Into<BigInt>) -> Self {
        OrbitPoint {
            p: p.into(),
            n: n.into(),
        }
    }

    /// The quadratic form value p^2 - 12n^2.
    pub fn norm(&self) -> BigInt {
        &self.p * &self.p - 12i32 * &self.n * &self.n
    }

    /// Exact check that the point lies on p^2 - 12n^2 = z.
    pub fn lies_on(&self, z: u64) -> bool {
        self.norm() == BigInt::from(z)
    }

    /// Advance in place by one forward step.
    pub fn step_forward(&mut self) {
        let p = 7i32 * &self.p + 24i32 * &self.n;
        let n = 2i32 * &self.p + 7i32 * &self.n;
        self.p = p;
        self.n = n;
    }

    pub fn forward(&self) -> OrbitPoint {
        let mut next = self.clone();
        next.step_forward();
        next
    }

    pub fn backward(&self) -> OrbitPoint {
        OrbitPoint {
            p: 7i32 * &self.p - 24i32 * &self.n,
            n: -2i32 * &self.p + 7i32 * &self.n,
        }
    }

    /// The first `steps` points of the forward orbit, starting with `self`.
    pub fn trajectory(&self, steps: u32) -> Trajectory {
        Trajectory {
            state: self.clone(),
            remaining: steps,
        }
    }
}

impl fmt::Display for OrbitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(p={}, n={})", self.p, self.n)
    }
}

/// Iterator over a forward orbit. Yields the current point, then advances.
#[derive(Debug, Clone)]
pub struct Trajectory {
    state: OrbitPoint,
    remaining: u32,
}

impl Iterator for Trajectory {
    type Item = OrbitPoint;

    fn next(&mut self) -> Option<OrbitPoint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.state.clone();
        self.state.step_forward();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trajectory {}
