//! Units of measurement and their algebra.
//!
//! [`Unit`] is a closed set of variants:
//! - [`BaseUnit`]: an atomic system unit (metre, second, ...)
//! - [`AlternateUnit`]: a named system unit over another one (newton, pascal, ...)
//! - [`AnnotatedUnit`]: any unit plus a free-text annotation
//! - [`TransformedUnit`]: a parent unit and a converter to it (kilometre, celsius, ...)
//! - [`ProductUnit`]: products of rational powers of the above
//!
//! Units are cheap to clone (`Arc` inside), immutable and compared
//! structurally.

mod alternate;
mod annotated;
mod base;
mod product;
mod transformed;

pub use alternate::AlternateUnit;
pub use annotated::AnnotatedUnit;
pub use base::BaseUnit;
pub use product::{Element, ProductUnit};
pub use transformed::TransformedUnit;

use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::prefix::MetricPrefix;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Base(Arc<BaseUnit>),
    Alternate(Arc<AlternateUnit>),
    Annotated(Arc<AnnotatedUnit>),
    Transformed(Arc<TransformedUnit>),
    Product(Arc<ProductUnit>),
}

impl Unit {
    /// The dimensionless unit: the empty product
    pub fn one() -> Unit {
        Unit::Product(Arc::new(ProductUnit::empty()))
    }

    pub fn base(symbol: impl Into<String>, dimension: Dimension) -> Unit {
        Unit::Base(Arc::new(BaseUnit::new(symbol, dimension)))
    }

    pub fn base_named(
        symbol: impl Into<String>,
        name: impl Into<String>,
        dimension: Dimension,
    ) -> Unit {
        Unit::Base(Arc::new(BaseUnit::new(symbol, dimension).with_name(name)))
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Unit::Product(p) if p.is_empty())
    }

    pub fn symbol(&self) -> String {
        match self {
            Unit::Base(base) => base.symbol().to_string(),
            Unit::Alternate(alternate) => alternate.symbol().to_string(),
            Unit::Annotated(annotated) => annotated.actual().symbol(),
            Unit::Transformed(transformed) => transformed.symbol(),
            Unit::Product(product) => product.symbol(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Unit::Base(base) => base.name(),
            _ => None,
        }
    }

    pub fn annotation(&self) -> Option<&str> {
        match self {
            Unit::Annotated(annotated) => Some(annotated.annotation()),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Result<Dimension> {
        match self {
            Unit::Base(base) => Ok(base.dimension().clone()),
            Unit::Alternate(alternate) => alternate.parent().dimension(),
            Unit::Annotated(annotated) => annotated.actual().dimension(),
            Unit::Transformed(transformed) => transformed.parent().dimension(),
            Unit::Product(product) => product.dimension(),
        }
    }

    /// The unscaled unit this unit converts to
    pub fn system_unit(&self) -> Result<Unit> {
        match self {
            Unit::Base(_) | Unit::Alternate(_) => Ok(self.clone()),
            Unit::Annotated(annotated) => annotated.actual().system_unit(),
            Unit::Transformed(transformed) => transformed.parent().system_unit(),
            Unit::Product(product) => product.system_unit(),
        }
    }

    pub fn is_system_unit(&self) -> bool {
        self.system_unit().is_ok_and(|system| &system == self)
    }

    /// Converter from this unit to its system unit
    pub fn converter_to_si(&self) -> Result<Converter> {
        match self {
            Unit::Base(_) => Ok(Converter::Identity),
            Unit::Alternate(alternate) => alternate.parent().converter_to_si(),
            Unit::Annotated(annotated) => annotated.actual().converter_to_si(),
            Unit::Transformed(transformed) => Ok(transformed
                .parent()
                .converter_to_si()?
                .concatenate(transformed.to_parent())),
            Unit::Product(product) => product.converter_to_si(),
        }
    }

    /// Converter from this unit to `that`, through their common system unit.
    pub fn converter_to(&self, that: &Unit) -> Result<Converter> {
        if self == that {
            return Ok(Converter::Identity);
        }
        if !self.is_compatible(that) {
            return Err(Error::IncompatibleUnits {
                from: self.to_string(),
                to: that.to_string(),
            });
        }
        let this_to_si = self.converter_to_si()?;
        let that_to_si = that.converter_to_si()?;
        let converter = that_to_si.inverse().concatenate(&this_to_si);
        tracing::debug!("converter {} -> {}: {}", self, that, converter);
        Ok(converter)
    }

    /// Units are compatible when they share a dimension.
    pub fn is_compatible(&self, that: &Unit) -> bool {
        match (self.dimension(), that.dimension()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    pub fn multiply(&self, that: &Unit) -> Result<Unit> {
        ProductUnit::product_of(self, that)
    }

    pub fn divide(&self, that: &Unit) -> Result<Unit> {
        ProductUnit::quotient_of(self, that)
    }

    /// `1 / self`
    pub fn inverse(&self) -> Result<Unit> {
        ProductUnit::quotient_of(&Unit::one(), self)
    }

    pub fn pow(&self, n: i32) -> Result<Unit> {
        ProductUnit::pow_of(self, n)
    }

    pub fn root(&self, n: i32) -> Result<Unit> {
        ProductUnit::root_of(self, n)
    }

    /// Elements of the canonical product form; a non-product unit is `unit^1`.
    pub fn elements(&self) -> Vec<Element> {
        product::expand(self)
    }

    /// Constituent units and their integer powers.
    ///
    /// Root exponents are not represented here; use [`Unit::elements`] for
    /// the full rational form.
    pub fn product_units(&self) -> HashMap<Unit, i32> {
        match self {
            Unit::Base(_) => HashMap::from([(self.clone(), 1)]),
            Unit::Alternate(alternate) => alternate.parent().product_units(),
            Unit::Annotated(annotated) => annotated.actual().product_units(),
            Unit::Transformed(transformed) => transformed.parent().product_units(),
            Unit::Product(product) => product
                .elements()
                .iter()
                .map(|e| (e.unit().clone(), e.pow()))
                .collect(),
        }
    }

    pub fn annotate(&self, annotation: impl Into<String>) -> Unit {
        Unit::Annotated(Arc::new(AnnotatedUnit::new(self, annotation)))
    }

    /// A new system unit with its own symbol over this one.
    pub fn alternate(&self, symbol: impl Into<String>) -> Result<Unit> {
        AlternateUnit::new(self, symbol).map(|a| Unit::Alternate(Arc::new(a)))
    }

    /// Unit whose values map to this unit through `to_self`.
    pub fn transform(&self, to_self: Converter) -> Unit {
        if to_self.is_identity() {
            return self.clone();
        }
        Unit::Transformed(Arc::new(TransformedUnit::new(self, to_self, None)))
    }

    pub fn transform_with_symbol(&self, to_self: Converter, symbol: impl Into<String>) -> Unit {
        if to_self.is_identity() {
            return self.clone();
        }
        Unit::Transformed(Arc::new(TransformedUnit::new(
            self,
            to_self,
            Some(symbol.into()),
        )))
    }

    /// `factor` of this unit, e.g. `METRE.scale(1000.0)` is a kilometre.
    pub fn scale(&self, factor: f64) -> Result<Unit> {
        if factor == 1.0 {
            return Ok(self.clone());
        }
        Ok(self.transform(Converter::multiply(factor)?))
    }

    /// This unit with its zero moved, e.g. `KELVIN.shift(273.15)` is celsius.
    pub fn shift(&self, offset: f64) -> Result<Unit> {
        if offset == 0.0 {
            return Ok(self.clone());
        }
        Ok(self.transform(Converter::add(offset)?))
    }

    pub fn prefixed(&self, prefix: MetricPrefix) -> Result<Unit> {
        let symbol = format!("{}{}", prefix.symbol(), self.symbol());
        Ok(self.transform_with_symbol(Converter::multiply(prefix.factor())?, symbol))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            write!(f, "one")
        } else {
            write!(f, "{}", self.symbol())
        }
    }
}

impl From<BaseUnit> for Unit {
    fn from(base: BaseUnit) -> Self {
        Unit::Base(Arc::new(base))
    }
}
