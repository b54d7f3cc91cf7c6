//! Units formed by the product of rational powers of other units.
//!
//! A [`ProductUnit`] is always kept in canonical form:
//! - no two elements refer to the same unit
//! - each `pow/root` pair is reduced by its GCD, `root > 0`, `pow != 0`
//! - element order is irrelevant for equality and hashing
//!
//! The constructors never return a degenerate product: an empty product is
//! [`Unit::one()`] and a single element `u^1` is `u` itself. For example
//! `METRE.pow(2)?.divide(&METRE)?` is `METRE`.

use super::Unit;
use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::exponent::{self, gcd};
use crate::{Error, Result};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A rational power `unit^(pow/root)` inside a product unit
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    unit: Unit,
    pow: i32,
    root: i32,
}

impl Element {
    fn new(unit: Unit, pow: i32, root: i32) -> Self {
        Self { unit, pow, root }
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Power exponent, never zero but possibly negative
    pub fn pow(&self) -> i32 {
        self.pow
    }

    /// Root exponent, always greater than zero
    pub fn root(&self) -> i32 {
        self.root
    }

    fn symbol(&self) -> String {
        let symbol = self.unit.symbol();
        match (self.pow, self.root) {
            (1, 1) => symbol,
            (pow, 1) => format!("{}^{}", symbol, pow),
            (pow, root) => format!("{}^({}/{})", symbol, pow, root),
        }
    }
}

/// Product of rational powers of units, in canonical form
#[derive(Clone, Debug, Default)]
pub struct ProductUnit {
    elements: Vec<Element>,
}

impl ProductUnit {
    /// The empty product backing [`Unit::one()`]
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// `left * right`
    pub fn product_of(left: &Unit, right: &Unit) -> Result<Unit> {
        instance(&expand(left), &expand(right))
    }

    /// `left / right`
    pub fn quotient_of(left: &Unit, right: &Unit) -> Result<Unit> {
        let divisor: Vec<Element> = expand(right)
            .into_iter()
            .map(|e| {
                let pow = exponent::narrow(-(e.pow as i64))?;
                Ok(Element::new(e.unit, pow, e.root))
            })
            .collect::<Result<_>>()?;
        instance(&expand(left), &divisor)
    }

    /// `unit^(1/n)`; a negative order takes the root of the reciprocal.
    pub fn root_of(unit: &Unit, n: i32) -> Result<Unit> {
        if n == 0 {
            return Err(Error::arithmetic(format!("root of order zero of {}", unit)));
        }
        let (sign, order) = (n.signum() as i64, (n as i64).abs());
        let mut elements = Vec::new();
        match unit {
            Unit::Product(product) => {
                for e in &product.elements {
                    let (pow, root) = exponent::reduce(e.pow as i64 * sign, e.root as i64 * order)?;
                    elements.push(Element::new(e.unit.clone(), pow, root));
                }
            }
            other => {
                let (pow, root) = exponent::reduce(sign, order)?;
                elements.push(Element::new(other.clone(), pow, root));
            }
        }
        instance(&elements, &[])
    }

    /// `unit^n`
    pub fn pow_of(unit: &Unit, n: i32) -> Result<Unit> {
        if n == 0 {
            return Err(Error::arithmetic(format!("{} raised to power zero", unit)));
        }
        let mut elements = Vec::new();
        match unit {
            Unit::Product(product) => {
                for e in &product.elements {
                    let (pow, root) = exponent::reduce(e.pow as i64 * n as i64, e.root as i64)?;
                    elements.push(Element::new(e.unit.clone(), pow, root));
                }
            }
            other => elements.push(Element::new(other.clone(), n, 1)),
        }
        instance(&elements, &[])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn unit_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn symbol(&self) -> String {
        self.elements
            .iter()
            .map(Element::symbol)
            .collect::<Vec<_>>()
            .join("·")
    }

    pub(crate) fn dimension(&self) -> Result<Dimension> {
        let mut dimension = Dimension::none();
        for e in &self.elements {
            let d = e.unit.dimension()?.pow(e.pow)?.root(e.root)?;
            dimension = dimension.multiply(&d)?;
        }
        Ok(dimension)
    }

    pub(crate) fn system_unit(&self) -> Result<Unit> {
        let mut system = Unit::one();
        for e in &self.elements {
            let unit = e.unit.system_unit()?.pow(e.pow)?.root(e.root)?;
            system = system.multiply(&unit)?;
        }
        Ok(system)
    }

    /// Multiplicative converter to the system unit.
    ///
    /// Every element must be linear with an integer exponent, including
    /// elements already in system units. Each contributes its scale factor
    /// raised to its power.
    pub(crate) fn converter_to_si(&self) -> Result<Converter> {
        let mut converter = Converter::Identity;
        for e in &self.elements {
            let element_converter = e.unit.converter_to_si()?;
            if !element_converter.is_linear() {
                return Err(Error::UnsupportedOperation(format!(
                    "{} is non-linear, cannot convert",
                    e.unit
                )));
            }
            if e.root != 1 {
                return Err(Error::UnsupportedOperation(format!(
                    "{} holds a base unit with fractional exponent",
                    e.unit
                )));
            }
            let factor = element_converter.convert(1.0).powi(e.pow);
            if factor == 1.0 {
                continue;
            }
            let scale = Converter::multiply(factor).map_err(|_| {
                Error::arithmetic(format!(
                    "{}^{} scale factor {} is out of range",
                    e.unit, e.pow, factor
                ))
            })?;
            converter = converter.concatenate(&scale);
        }
        Ok(converter)
    }
}

/// View any unit as a list of elements; non-products are `unit^1`.
pub(super) fn expand(unit: &Unit) -> Vec<Element> {
    match unit {
        Unit::Product(product) => product.elements.clone(),
        other => vec![Element::new(other.clone(), 1, 1)],
    }
}

/// Merge two element lists into the canonical unit for their product.
fn instance(left: &[Element], right: &[Element]) -> Result<Unit> {
    let mut result = Vec::with_capacity(left.len() + right.len());

    for l in left {
        let (p2, r2) = right
            .iter()
            .find(|r| r.unit == l.unit)
            .map(|r| (r.pow as i64, r.root as i64))
            .unwrap_or((0, 1));
        let pow = l.pow as i64 * r2 + p2 * l.root as i64;
        let root = l.root as i64 * r2;
        if pow != 0 {
            let divisor = gcd(pow.abs(), root);
            let pow = exponent::narrow(pow / divisor)?;
            let root = exponent::narrow(root / divisor)?;
            result.push(Element::new(l.unit.clone(), pow, root));
        }
    }

    for r in right {
        if !left.iter().any(|l| l.unit == r.unit) {
            result.push(r.clone());
        }
    }

    let unit = match result.len() {
        0 => Unit::one(),
        1 if result[0].pow == result[0].root => result.remove(0).unit,
        _ => Unit::Product(std::sync::Arc::new(ProductUnit { elements: result })),
    };
    tracing::trace!("canonical product: {}", unit);
    Ok(unit)
}

impl PartialEq for ProductUnit {
    fn eq(&self, other: &Self) -> bool {
        if self.elements.len() != other.elements.len() {
            return false;
        }
        self.elements.iter().all(|e| {
            other
                .elements
                .iter()
                .find(|o| o.unit == e.unit)
                .is_some_and(|o| o.pow == e.pow && o.root == e.root)
        })
    }
}

impl Eq for ProductUnit {}

impl Hash for ProductUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: elements are hashed separately and summed.
        let code = self.elements.iter().fold(0u64, |acc, e| {
            let mut hasher = DefaultHasher::new();
            e.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        code.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metre() -> Unit {
        Unit::base("m", Dimension::length())
    }

    fn second() -> Unit {
        Unit::base("s", Dimension::time())
    }

    fn kilogram() -> Unit {
        Unit::base("kg", Dimension::mass())
    }

    fn triples(unit: &Unit) -> Vec<(String, i32, i32)> {
        let mut triples: Vec<_> = unit
            .elements()
            .iter()
            .map(|e| (e.unit().symbol(), e.pow(), e.root()))
            .collect();
        triples.sort();
        triples
    }

    #[test]
    fn test_square_of_metre() {
        let area = ProductUnit::product_of(&metre(), &metre()).unwrap();
        assert!(matches!(area, Unit::Product(_)));
        assert_eq!(triples(&area), vec![("m".to_string(), 2, 1)]);
    }

    #[test]
    fn test_quotient_of_metre_and_second() {
        let velocity = ProductUnit::quotient_of(&metre(), &second()).unwrap();
        assert_eq!(
            triples(&velocity),
            vec![("m".to_string(), 1, 1), ("s".to_string(), -1, 1)]
        );
    }

    #[test]
    fn test_unit_times_inverse_is_one() {
        let inverse = ProductUnit::pow_of(&metre(), -1).unwrap();
        let product = ProductUnit::product_of(&metre(), &inverse).unwrap();
        assert_eq!(product, Unit::one());
    }

    #[test]
    fn test_product_divided_by_itself_is_one() {
        let force = kilogram()
            .multiply(&metre())
            .unwrap()
            .divide(&second().pow(2).unwrap())
            .unwrap();
        assert_eq!(ProductUnit::quotient_of(&force, &force).unwrap(), Unit::one());
    }

    #[test]
    fn test_product_is_commutative() {
        let a = ProductUnit::quotient_of(&metre(), &second()).unwrap();
        let b = kilogram();
        let ab = ProductUnit::product_of(&a, &b).unwrap();
        let ba = ProductUnit::product_of(&b, &a).unwrap();
        assert_eq!(ab, ba);

        // Stored order differs, equality does not.
        let Unit::Product(ab_product) = &ab else { panic!("expected product") };
        let Unit::Product(ba_product) = &ba else { panic!("expected product") };
        assert_ne!(ab_product.elements()[0].unit(), ba_product.elements()[0].unit());
    }

    #[test]
    fn test_equal_products_hash_equal() {
        use std::collections::HashSet;

        let ab = ProductUnit::product_of(&metre(), &second()).unwrap();
        let ba = ProductUnit::product_of(&second(), &metre()).unwrap();
        let set: HashSet<Unit> = [ab, ba].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_root_of_square_unwraps() {
        let area = metre().pow(2).unwrap();
        let root = ProductUnit::root_of(&area, 2).unwrap();
        assert_eq!(root, metre());
        assert!(matches!(root, Unit::Base(_)));
    }

    #[test]
    fn test_root_of_base_unit() {
        let sqrt = ProductUnit::root_of(&metre(), 2).unwrap();
        assert_eq!(triples(&sqrt), vec![("m".to_string(), 1, 2)]);

        let back = ProductUnit::pow_of(&sqrt, 2).unwrap();
        assert_eq!(back, metre());
    }

    #[test]
    fn test_half_powers_merge() {
        let sqrt = ProductUnit::root_of(&metre(), 2).unwrap();
        let product = ProductUnit::product_of(&sqrt, &sqrt).unwrap();
        assert_eq!(product, metre());
    }

    #[test]
    fn test_negative_root() {
        let r = ProductUnit::root_of(&metre(), -2).unwrap();
        assert_eq!(triples(&r), vec![("m".to_string(), -1, 2)]);
    }

    #[test]
    fn test_zero_root_and_pow_rejected() {
        assert!(matches!(
            ProductUnit::root_of(&metre(), 0),
            Err(Error::Arithmetic(_))
        ));
        assert!(matches!(
            ProductUnit::pow_of(&metre(), 0),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_pow_reduces_by_gcd() {
        let r = ProductUnit::root_of(&metre(), 4).unwrap();
        let p = ProductUnit::pow_of(&r, 2).unwrap();
        assert_eq!(triples(&p), vec![("m".to_string(), 1, 2)]);
    }

    #[test]
    fn test_pow_overflow_reported() {
        let big = ProductUnit::pow_of(&metre(), i32::MAX).unwrap();
        assert!(matches!(
            ProductUnit::product_of(&big, &metre()),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_one_is_multiplicative_identity() {
        let velocity = ProductUnit::quotient_of(&metre(), &second()).unwrap();
        assert_eq!(ProductUnit::product_of(&Unit::one(), &velocity).unwrap(), velocity);
        assert_eq!(ProductUnit::product_of(&metre(), &Unit::one()).unwrap(), metre());
    }

    #[test]
    fn test_symbol() {
        let unit = kilogram()
            .multiply(&metre())
            .unwrap()
            .divide(&second().pow(2).unwrap())
            .unwrap();
        assert_eq!(unit.symbol(), "kg·m·s^-2");
        assert_eq!(ProductUnit::root_of(&metre(), 2).unwrap().symbol(), "m^(1/2)");
    }

    #[test]
    fn test_converter_over_scaled_elements() {
        let km = metre().scale(1000.0).unwrap();
        let hour = second().scale(3600.0).unwrap();
        let speed = km.divide(&hour).unwrap();
        let converter = speed.converter_to_si().unwrap();
        assert!((converter.convert(36.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_converter_rejects_non_linear_element() {
        let celsius = Unit::base("K", Dimension::temperature()).shift(273.15).unwrap();
        let per_second = celsius.divide(&second()).unwrap();
        assert!(matches!(
            per_second.converter_to_si(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_converter_rejects_fractional_scaled_element() {
        let km = metre().scale(1000.0).unwrap();
        let sqrt_km = km.root(2).unwrap();
        assert!(matches!(
            sqrt_km.converter_to_si(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_fractional_system_element_unsupported() {
        let sqrt_m = metre().root(2).unwrap();
        assert!(matches!(
            sqrt_m.converter_to_si(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_converter_factor_overflow_is_arithmetic_error() {
        let big = metre().scale(1e200).unwrap().pow(2).unwrap();
        assert!(matches!(big.converter_to_si(), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_converter_large_power_of_scaled_element() {
        let km = metre().scale(1000.0).unwrap();
        let huge = km.pow(i32::MAX).unwrap();
        assert!(matches!(huge.converter_to_si(), Err(Error::Arithmetic(_))));

        let cubic_km = km.pow(3).unwrap();
        assert_eq!(
            cubic_km.converter_to_si().unwrap(),
            Converter::multiply(1e9).unwrap()
        );
    }

    #[test]
    fn test_converter_inverse_power() {
        let per_km = Unit::one().divide(&metre().scale(1000.0).unwrap()).unwrap();
        assert_eq!(
            per_km.converter_to_si().unwrap(),
            Converter::multiply(0.001).unwrap()
        );
    }
}
