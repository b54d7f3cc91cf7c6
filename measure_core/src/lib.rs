#![forbid(unsafe_code)]

//! Units of measurement and the conversions between them.
//!
//! This crate provides:
//! - Physical dimensions over the seven SI base dimensions
//! - Value converters (scale, offset, exponential, logarithmic, compound)
//! - Unit algebra with canonical product units
//! - The SI system of units and a quantity-kind registry
//! - Configuration and logging for the `measure` binary

pub mod error;
pub mod exponent;
pub mod dimension;
pub mod math_context;
pub mod converter;
pub mod prefix;
pub mod unit;
pub mod registry;
pub mod si;
pub mod quantity;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use exponent::Exponent;
pub use dimension::{BaseDimension, Dimension};
pub use math_context::{MathContext, Rounding};
pub use converter::{
    AddConverter, CompoundConverter, Converter, ExpConverter, LogConverter, MultiplyConverter,
};
pub use prefix::MetricPrefix;
pub use unit::{AlternateUnit, AnnotatedUnit, BaseUnit, Element, ProductUnit, TransformedUnit, Unit};
pub use registry::UnitRegistry;
pub use si::{build_si, get_si, QuantityKind, SystemOfUnits};
pub use quantity::Quantity;
pub use config::Config;
