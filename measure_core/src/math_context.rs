//! Precision and rounding settings for decimal conversion.

use crate::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding mode applied when a decimal result exceeds the requested precision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Towards zero
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest, ties away from zero
    HalfUp,
    /// Nearest, ties towards zero
    HalfDown,
    /// Nearest, ties to even
    #[default]
    HalfEven,
}

impl From<Rounding> for RoundingStrategy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Up => RoundingStrategy::AwayFromZero,
            Rounding::Down => RoundingStrategy::ToZero,
            Rounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Rounding::Floor => RoundingStrategy::ToNegativeInfinity,
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfDown => RoundingStrategy::MidpointTowardZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Number of significant digits to keep and how to round beyond them.
///
/// `precision == 0` means unlimited: results are never rounded, and a
/// conversion whose exact result does not fit in a `Decimal` fails instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MathContext {
    pub precision: u32,
    #[serde(default)]
    pub rounding: Rounding,
}

impl MathContext {
    pub const UNLIMITED: MathContext = MathContext {
        precision: 0,
        rounding: Rounding::HalfUp,
    };

    pub const DECIMAL32: MathContext = MathContext {
        precision: 7,
        rounding: Rounding::HalfEven,
    };

    pub const DECIMAL64: MathContext = MathContext {
        precision: 16,
        rounding: Rounding::HalfEven,
    };

    pub const DECIMAL128: MathContext = MathContext {
        precision: 34,
        rounding: Rounding::HalfEven,
    };

    pub fn new(precision: u32, rounding: Rounding) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.precision == 0
    }

    /// Round `value` to this context's precision.
    pub fn round(&self, value: Decimal) -> Result<Decimal> {
        if self.is_unlimited() || significant_digits(&value) <= self.precision {
            return Ok(value);
        }
        value
            .round_sf_with_strategy(self.precision, self.rounding.into())
            .ok_or_else(|| {
                Error::arithmetic(format!(
                    "cannot round {} to {} significant digits",
                    value, self.precision
                ))
            })
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

fn significant_digits(value: &Decimal) -> u32 {
    let mut mantissa = value.normalize().mantissa().unsigned_abs();
    let mut digits = 0;
    while mantissa > 0 {
        digits += 1;
        mantissa /= 10;
    }
    digits.max(1)
}
