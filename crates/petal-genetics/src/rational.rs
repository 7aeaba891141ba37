// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Exact rational reduction
//!
//! Binary GCD and the reduced odds derived from distribution weights.

use core::fmt;

/// Greatest common divisor using the binary (Stein) algorithm.
///
/// `gcd(0, x) == x`, so `gcd(0, 0) == 0`.
///
/// # Example
/// ```
/// use petal_genetics::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(17, 5), 1);
/// assert_eq!(gcd(0, 9), 9);
/// ```
pub fn gcd(mut u: u64, mut v: u64) -> u64 {
    if u == 0 {
        return v;
    }
    if v == 0 {
        return u;
    }

    // Common factors of two
    let shift = (u | v).trailing_zeros();
    u >>= u.trailing_zeros();

    // u stays odd from here on
    loop {
        v >>= v.trailing_zeros();
        if u > v {
            core::mem::swap(&mut u, &mut v);
        }
        v -= u;
        if v == 0 {
            break;
        }
    }
    u << shift
}

/// Probability of one outcome as a fraction in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Odds {
    pub numerator: u64,
    pub denominator: u64,
}

impl Odds {
    /// Reduce `weight / total`.
    ///
    /// # Panics
    /// If `total` is zero.
    pub fn new(weight: u64, total: u64) -> Self {
        assert!(total > 0, "odds need a nonzero total weight");
        let divisor = gcd(weight, total);
        Self {
            numerator: weight / divisor,
            denominator: total / divisor,
        }
    }

    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Percentage text with `precision` digits after the decimal point
    pub fn percentage(self, precision: usize) -> String {
        format!("{:.*}%", precision, 100.0 * self.as_f64())
    }

    /// Percentage followed by the exact fraction, e.g. `6.25% (1/16)`
    pub fn describe(self, precision: usize) -> String {
        format!("{} ({})", self.percentage(precision), self)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
