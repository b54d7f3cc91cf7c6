//! Rational exponents shared by dimensions and product units.
//!
//! An exponent `pow/root` is always kept in lowest terms with `root > 0`.
//! Arithmetic is done in `i64` and narrowed back to `i32`, so overflow is
//! reported instead of wrapping.

use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// Greatest common divisor (Euclid's algorithm), `gcd(m, 0) == m`.
pub fn gcd(m: i64, n: i64) -> i64 {
    if n == 0 {
        m
    } else {
        gcd(n, m % n)
    }
}

/// Reduce `pow/root` by their GCD and narrow to `i32`.
///
/// `root` must be strictly positive; `pow` may be zero, in which case the
/// result is `(0, 1)`.
pub(crate) fn reduce(pow: i64, root: i64) -> Result<(i32, i32)> {
    debug_assert!(root > 0, "root exponent must be positive");
    let divisor = gcd(pow.abs(), root).max(1);
    let pow = narrow(pow / divisor)?;
    let root = narrow(root / divisor)?;
    Ok((pow, root))
}

pub(crate) fn narrow(value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| Error::arithmetic(format!("exponent {} overflows i32", value)))
}

/// A reduced rational exponent `pow/root`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exponent {
    pow: i32,
    root: i32,
}

impl Exponent {
    pub const ZERO: Exponent = Exponent { pow: 0, root: 1 };
    pub const ONE: Exponent = Exponent { pow: 1, root: 1 };

    /// Build a reduced exponent; `root == 0` is an arithmetic error and a
    /// negative root moves its sign onto the power.
    pub fn new(pow: i32, root: i32) -> Result<Self> {
        if root == 0 {
            return Err(Error::arithmetic("root exponent must be non-zero"));
        }
        let (pow, root) = if root < 0 {
            (-(pow as i64), -(root as i64))
        } else {
            (pow as i64, root as i64)
        };
        let (pow, root) = reduce(pow, root)?;
        Ok(Self { pow, root })
    }

    pub const fn integer(pow: i32) -> Self {
        Self { pow, root: 1 }
    }

    pub fn pow(&self) -> i32 {
        self.pow
    }

    pub fn root(&self) -> i32 {
        self.root
    }

    pub fn is_zero(&self) -> bool {
        self.pow == 0
    }

    pub fn is_integer(&self) -> bool {
        self.root == 1
    }

    pub fn checked_add(&self, other: &Exponent) -> Result<Exponent> {
        let pow = self.pow as i64 * other.root as i64 + other.pow as i64 * self.root as i64;
        let root = self.root as i64 * other.root as i64;
        let (pow, root) = reduce(pow, root)?;
        Ok(Exponent { pow, root })
    }

    /// Multiply by an integer factor
    pub fn checked_mul(&self, n: i32) -> Result<Exponent> {
        let (pow, root) = reduce(self.pow as i64 * n as i64, self.root as i64)?;
        Ok(Exponent { pow, root })
    }

    /// Divide by a non-zero integer
    pub fn checked_div(&self, n: i32) -> Result<Exponent> {
        if n == 0 {
            return Err(Error::arithmetic("root of order zero"));
        }
        let (pow, root) = if n < 0 {
            (-(self.pow as i64), self.root as i64 * -(n as i64))
        } else {
            (self.pow as i64, self.root as i64 * n as i64)
        };
        let (pow, root) = reduce(pow, root)?;
        Ok(Exponent { pow, root })
    }

    pub fn as_f64(&self) -> f64 {
        self.pow as f64 / self.root as f64
    }
}

impl Ord for Exponent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both roots are positive, so cross-multiplication preserves order.
        let lhs = self.pow as i64 * other.root as i64;
        let rhs = other.pow as i64 * self.root as i64;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Exponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root == 1 {
            write!(f, "{}", self.pow)
        } else {
            write!(f, "({}/{})", self.pow, self.root)
        }
    }
}
