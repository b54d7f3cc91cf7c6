//! Physical dimensions.
//!
//! A dimension is a product of rational powers of the 7 SI base dimensions:
//! - L: Length
//! - M: Mass
//! - T: Time
//! - I: Electric current
//! - Θ: Thermodynamic temperature
//! - N: Amount of substance
//! - J: Luminous intensity
//!
//! Exponents are exact rationals, so `root` never truncates: the square root
//! of `[L]` is `[L]^(1/2)`, and squaring it gives `[L]` back.

use crate::exponent::Exponent;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the 7 SI base dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    pub fn symbol(&self) -> char {
        match self {
            BaseDimension::Length => 'L',
            BaseDimension::Mass => 'M',
            BaseDimension::Time => 'T',
            BaseDimension::ElectricCurrent => 'I',
            BaseDimension::Temperature => 'Θ',
            BaseDimension::AmountOfSubstance => 'N',
            BaseDimension::LuminousIntensity => 'J',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.symbol() == symbol)
    }
}

/// A physical dimension: base dimension → non-zero rational exponent.
///
/// Zero exponents are never stored, so derived equality is structural.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension {
    exponents: BTreeMap<BaseDimension, Exponent>,
}

impl Dimension {
    /// The dimension of pure numbers; identity for `multiply`.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn base(base: BaseDimension) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(base, Exponent::ONE);
        Self { exponents }
    }

    pub fn length() -> Self {
        Self::base(BaseDimension::Length)
    }

    pub fn mass() -> Self {
        Self::base(BaseDimension::Mass)
    }

    pub fn time() -> Self {
        Self::base(BaseDimension::Time)
    }

    pub fn electric_current() -> Self {
        Self::base(BaseDimension::ElectricCurrent)
    }

    pub fn temperature() -> Self {
        Self::base(BaseDimension::Temperature)
    }

    pub fn amount_of_substance() -> Self {
        Self::base(BaseDimension::AmountOfSubstance)
    }

    pub fn luminous_intensity() -> Self {
        Self::base(BaseDimension::LuminousIntensity)
    }

    /// Build from `(base, exponent)` pairs; repeated bases are summed.
    pub fn from_exponents<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BaseDimension, Exponent)>,
    {
        let mut dimension = Self::none();
        for (base, exponent) in pairs {
            dimension.accumulate(base, exponent)?;
        }
        Ok(dimension)
    }

    pub fn exponent(&self, base: BaseDimension) -> Exponent {
        self.exponents.get(&base).copied().unwrap_or(Exponent::ZERO)
    }

    pub fn exponents(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
        self.exponents.iter().map(|(b, e)| (*b, *e))
    }

    pub fn is_none(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Result<Dimension> {
        let mut result = self.clone();
        for (base, exponent) in other.exponents() {
            result.accumulate(base, exponent)?;
        }
        Ok(result)
    }

    /// Divide dimensions: `self * other^-1`
    pub fn divide(&self, other: &Dimension) -> Result<Dimension> {
        self.multiply(&other.pow(-1)?)
    }

    /// Raise to an integer power (multiply exponents)
    pub fn pow(&self, n: i32) -> Result<Dimension> {
        if n == 0 {
            return Err(crate::Error::arithmetic("dimension raised to power zero"));
        }
        self.map_exponents(|e| e.checked_mul(n))
    }

    /// Take the n-th root (divide exponents, exactly)
    pub fn root(&self, n: i32) -> Result<Dimension> {
        if n == 0 {
            return Err(crate::Error::arithmetic("root of order zero"));
        }
        self.map_exponents(|e| e.checked_div(n))
    }

    /// Decompose into fundamental dimensions and their exponents.
    ///
    /// Returns `None` when this dimension is itself fundamental.
    pub fn product_dimensions(&self) -> Option<BTreeMap<Dimension, Exponent>> {
        if self.is_fundamental() {
            return None;
        }
        Some(
            self.exponents()
                .map(|(base, exponent)| (Dimension::base(base), exponent))
                .collect(),
        )
    }

    pub fn is_fundamental(&self) -> bool {
        self.exponents.len() == 1 && self.exponents.values().all(|e| *e == Exponent::ONE)
    }

    fn accumulate(&mut self, base: BaseDimension, exponent: Exponent) -> Result<()> {
        let sum = self.exponent(base).checked_add(&exponent)?;
        if sum.is_zero() {
            self.exponents.remove(&base);
        } else {
            self.exponents.insert(base, sum);
        }
        Ok(())
    }

    fn map_exponents(&self, f: impl Fn(&Exponent) -> Result<Exponent>) -> Result<Dimension> {
        let mut exponents = BTreeMap::new();
        for (base, exponent) in &self.exponents {
            let mapped = f(exponent)?;
            if !mapped.is_zero() {
                exponents.insert(*base, mapped);
            }
        }
        Ok(Dimension { exponents })
    }
}

impl From<BaseDimension> for Dimension {
    fn from(base: BaseDimension) -> Self {
        Dimension::base(base)
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.symbol())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "1");
        }
        for (i, (base, exponent)) in self.exponents().enumerate() {
            if i > 0 {
                write!(f, "·")?;
            }
            if exponent == Exponent::ONE {
                write!(f, "{}", base)?;
            } else {
                write!(f, "{}^{}", base, exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn velocity() -> Dimension {
        Dimension::length().divide(&Dimension::time()).unwrap()
    }

    fn force() -> Dimension {
        Dimension::mass()
            .multiply(&Dimension::length())
            .unwrap()
            .divide(&Dimension::time().pow(2).unwrap())
            .unwrap()
    }

    #[test]
    fn test_multiply_commutative() {
        let a = velocity();
        let b = force();
        assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn test_none_is_identity() {
        let d = force();
        assert_eq!(d.multiply(&Dimension::none()).unwrap(), d);
        assert_eq!(Dimension::none().multiply(&d).unwrap(), d);
    }

    #[test]
    fn test_divide_by_self_is_none() {
        let d = force();
        assert!(d.divide(&d).unwrap().is_none());
    }

    #[test]
    fn test_pow_multiplies_exponents() {
        let area = Dimension::length().pow(2).unwrap();
        assert_eq!(area.exponent(BaseDimension::Length), Exponent::integer(2));

        let inverse = velocity().pow(-1).unwrap();
        assert_eq!(inverse.exponent(BaseDimension::Length), Exponent::integer(-1));
        assert_eq!(inverse.exponent(BaseDimension::Time), Exponent::integer(1));
    }

    #[test]
    fn test_root_is_exact() {
        let sqrt_length = Dimension::length().root(2).unwrap();
        assert_eq!(
            sqrt_length.exponent(BaseDimension::Length),
            Exponent::new(1, 2).unwrap()
        );
        assert_eq!(sqrt_length.pow(2).unwrap(), Dimension::length());
    }

    #[test]
    fn test_root_of_area() {
        let area = Dimension::length().pow(2).unwrap();
        assert_eq!(area.root(2).unwrap(), Dimension::length());
    }

    #[test]
    fn test_zero_root_and_pow_rejected() {
        assert!(matches!(Dimension::length().root(0), Err(Error::Arithmetic(_))));
        assert!(matches!(Dimension::length().pow(0), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_product_dimensions() {
        assert!(Dimension::length().product_dimensions().is_none());

        let factors = force().product_dimensions().unwrap();
        assert_eq!(factors.len(), 3);
        assert_eq!(factors[&Dimension::mass()], Exponent::ONE);
        assert_eq!(factors[&Dimension::time()], Exponent::integer(-2));

        assert!(Dimension::none().product_dimensions().unwrap().is_empty());
    }

    #[test]
    fn test_equality_ignores_construction_order() {
        let a = Dimension::from_exponents([
            (BaseDimension::Time, Exponent::integer(-1)),
            (BaseDimension::Length, Exponent::ONE),
        ])
        .unwrap();
        assert_eq!(a, velocity());
    }

    #[test]
    fn test_cancelled_exponents_removed() {
        let d = Dimension::from_exponents([
            (BaseDimension::Mass, Exponent::ONE),
            (BaseDimension::Mass, Exponent::integer(-1)),
        ])
        .unwrap();
        assert_eq!(d, Dimension::none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::none().to_string(), "1");
        assert_eq!(velocity().to_string(), "[L]·[T]^-1");
        assert_eq!(
            Dimension::length().root(2).unwrap().to_string(),
            "[L]^(1/2)"
        );
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(BaseDimension::from_symbol('Θ'), Some(BaseDimension::Temperature));
        assert_eq!(BaseDimension::from_symbol('X'), None);
    }
}
