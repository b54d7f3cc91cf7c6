//! Measured values: a number paired with its unit.

use crate::math_context::MathContext;
use crate::unit::Unit;
use crate::Result;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: &Unit) -> Self {
        Self {
            value,
            unit: unit.clone(),
        }
    }

    /// This quantity expressed in `unit`. No conversion is applied when the
    /// units are equal.
    pub fn to(&self, unit: &Unit) -> Result<Quantity> {
        if &self.unit == unit {
            return Ok(self.clone());
        }
        Ok(Quantity::new(self.value_in(unit)?, unit))
    }

    /// Numeric value of this quantity in `unit`
    pub fn value_in(&self, unit: &Unit) -> Result<f64> {
        if &self.unit == unit {
            return Ok(self.value);
        }
        Ok(self.unit.converter_to(unit)?.convert(self.value))
    }

    /// Decimal value of this quantity in `unit`, rounded per `ctx`
    pub fn decimal_value_in(&self, unit: &Unit, ctx: &MathContext) -> Result<Decimal> {
        let value = crate::converter::decimal_from_f64(self.value)?;
        if &self.unit == unit {
            return Ok(value);
        }
        self.unit.converter_to(unit)?.convert_decimal(value, ctx)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_one() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}
