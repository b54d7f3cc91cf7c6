//! The International System of Units.
//!
//! Base units, named derived units and a handful of common non-system units,
//! plus a [`SystemOfUnits`] that looks them up by symbol and maps every
//! [`QuantityKind`] to its system unit.

use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::prefix::MetricPrefix;
use crate::registry::UnitRegistry;
use crate::unit::Unit;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kinds of quantity with a registered system unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Dimensionless,
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Area,
    Volume,
    Velocity,
    Acceleration,
    AngularAcceleration,
    Frequency,
    Force,
    Pressure,
    Energy,
    Power,
    ElectricCharge,
    ElectricPotential,
    Luminance,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 21] = [
        QuantityKind::Dimensionless,
        QuantityKind::Length,
        QuantityKind::Mass,
        QuantityKind::Time,
        QuantityKind::ElectricCurrent,
        QuantityKind::Temperature,
        QuantityKind::AmountOfSubstance,
        QuantityKind::LuminousIntensity,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Velocity,
        QuantityKind::Acceleration,
        QuantityKind::AngularAcceleration,
        QuantityKind::Frequency,
        QuantityKind::Force,
        QuantityKind::Pressure,
        QuantityKind::Energy,
        QuantityKind::Power,
        QuantityKind::ElectricCharge,
        QuantityKind::ElectricPotential,
        QuantityKind::Luminance,
    ];
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// Base units
// ============================================================================

pub static ONE: Lazy<Unit> = Lazy::new(Unit::one);
pub static METRE: Lazy<Unit> = Lazy::new(|| Unit::base_named("m", "metre", Dimension::length()));
pub static KILOGRAM: Lazy<Unit> =
    Lazy::new(|| Unit::base_named("kg", "kilogram", Dimension::mass()));
pub static SECOND: Lazy<Unit> = Lazy::new(|| Unit::base_named("s", "second", Dimension::time()));
pub static AMPERE: Lazy<Unit> =
    Lazy::new(|| Unit::base_named("A", "ampere", Dimension::electric_current()));
pub static KELVIN: Lazy<Unit> =
    Lazy::new(|| Unit::base_named("K", "kelvin", Dimension::temperature()));
pub static MOLE: Lazy<Unit> =
    Lazy::new(|| Unit::base_named("mol", "mole", Dimension::amount_of_substance()));
pub static CANDELA: Lazy<Unit> =
    Lazy::new(|| Unit::base_named("cd", "candela", Dimension::luminous_intensity()));

// ============================================================================
// Derived units with special names
// ============================================================================

// The definitions below are fixed; a failure here is a bug in this module.

pub static RADIAN: Lazy<Unit> =
    Lazy::new(|| ONE.alternate("rad").expect("radian is an alternate of one"));
pub static STERADIAN: Lazy<Unit> =
    Lazy::new(|| ONE.alternate("sr").expect("steradian is an alternate of one"));
pub static HERTZ: Lazy<Unit> = Lazy::new(|| {
    ONE.divide(&SECOND)
        .and_then(|u| u.alternate("Hz"))
        .expect("hertz is 1/s")
});
pub static NEWTON: Lazy<Unit> = Lazy::new(|| {
    KILOGRAM
        .multiply(&METRE)
        .and_then(|u| u.divide(&SECOND.pow(2)?))
        .and_then(|u| u.alternate("N"))
        .expect("newton is kg·m/s²")
});
pub static PASCAL: Lazy<Unit> = Lazy::new(|| {
    NEWTON
        .divide(&METRE.pow(2).expect("m²"))
        .and_then(|u| u.alternate("Pa"))
        .expect("pascal is N/m²")
});
pub static JOULE: Lazy<Unit> = Lazy::new(|| {
    NEWTON
        .multiply(&METRE)
        .and_then(|u| u.alternate("J"))
        .expect("joule is N·m")
});
pub static WATT: Lazy<Unit> = Lazy::new(|| {
    JOULE
        .divide(&SECOND)
        .and_then(|u| u.alternate("W"))
        .expect("watt is J/s")
});
pub static COULOMB: Lazy<Unit> = Lazy::new(|| {
    SECOND
        .multiply(&AMPERE)
        .and_then(|u| u.alternate("C"))
        .expect("coulomb is s·A")
});
pub static VOLT: Lazy<Unit> = Lazy::new(|| {
    WATT.divide(&AMPERE)
        .and_then(|u| u.alternate("V"))
        .expect("volt is W/A")
});

// ============================================================================
// Common non-system units
// ============================================================================

pub static KILOMETRE: Lazy<Unit> =
    Lazy::new(|| METRE.prefixed(MetricPrefix::Kilo).expect("kilo is a valid factor"));
pub static CENTIMETRE: Lazy<Unit> =
    Lazy::new(|| METRE.prefixed(MetricPrefix::Centi).expect("centi is a valid factor"));
pub static MILLIMETRE: Lazy<Unit> =
    Lazy::new(|| METRE.prefixed(MetricPrefix::Milli).expect("milli is a valid factor"));
pub static GRAM: Lazy<Unit> = Lazy::new(|| {
    Converter::multiply(1e-3)
        .map(|c| KILOGRAM.transform_with_symbol(c, "g"))
        .expect("gram is kg/1000")
});
pub static MINUTE: Lazy<Unit> = Lazy::new(|| {
    Converter::multiply(60.0)
        .map(|c| SECOND.transform_with_symbol(c, "min"))
        .expect("minute is 60 s")
});
pub static HOUR: Lazy<Unit> = Lazy::new(|| {
    Converter::multiply(3600.0)
        .map(|c| SECOND.transform_with_symbol(c, "h"))
        .expect("hour is 3600 s")
});
pub static LITRE: Lazy<Unit> = Lazy::new(|| {
    let cubic_metre = METRE.pow(3).expect("m³");
    Converter::multiply(1e-3)
        .map(|c| cubic_metre.transform_with_symbol(c, "L"))
        .expect("litre is m³/1000")
});
pub static CELSIUS: Lazy<Unit> = Lazy::new(|| {
    Converter::add(273.15)
        .map(|c| KELVIN.transform_with_symbol(c, "°C"))
        .expect("celsius is K shifted by 273.15")
});

// ============================================================================
// System of units
// ============================================================================

/// A named set of units, addressable by symbol, with a system unit per
/// quantity kind
#[derive(Debug)]
pub struct SystemOfUnits {
    name: String,
    units: BTreeMap<String, Unit>,
    registry: UnitRegistry<QuantityKind>,
}

impl SystemOfUnits {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: BTreeMap::new(),
            registry: UnitRegistry::new(),
        }
    }

    /// Add a unit under its display symbol (`one` for the dimensionless unit)
    pub fn with_unit(mut self, unit: &Unit) -> Self {
        self.units.insert(unit.to_string(), unit.clone());
        self
    }

    pub fn with_quantity(self, kind: QuantityKind, unit: &Unit) -> Self {
        self.registry.register(kind, unit.clone());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self, symbol: &str) -> Result<Unit> {
        self.units
            .get(symbol)
            .cloned()
            .ok_or_else(|| Error::UnknownUnit(symbol.to_string()))
    }

    /// Known symbols in sorted order
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.units.keys().map(String::as_str)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units.values()
    }

    pub fn registry(&self) -> &UnitRegistry<QuantityKind> {
        &self.registry
    }

    /// System unit registered for `kind`
    pub fn unit_for(&self, kind: QuantityKind) -> Result<Unit> {
        self.registry.require(&kind)
    }
}

/// Cached SI system - built once on first use
static SI: Lazy<SystemOfUnits> = Lazy::new(build_si_internal);

/// Get a reference to the shared SI system
pub fn get_si() -> &'static SystemOfUnits {
    &SI
}

/// Builds a fresh SI system
///
/// **Note**: prefer `get_si()`; a fresh system is useful when the quantity
/// registry should not be shared.
pub fn build_si() -> SystemOfUnits {
    build_si_internal()
}

fn square(unit: &Unit) -> Unit {
    unit.pow(2).expect("square of an SI unit")
}

fn per(numerator: &Unit, denominator: &Unit) -> Unit {
    numerator
        .divide(denominator)
        .expect("quotient of SI units")
}

fn build_si_internal() -> SystemOfUnits {
    let named = [
        &*ONE, &*METRE, &*KILOGRAM, &*SECOND, &*AMPERE, &*KELVIN, &*MOLE, &*CANDELA, &*RADIAN,
        &*STERADIAN, &*HERTZ, &*NEWTON, &*PASCAL, &*JOULE, &*WATT, &*COULOMB, &*VOLT,
        &*KILOMETRE, &*CENTIMETRE, &*MILLIMETRE, &*GRAM, &*MINUTE, &*HOUR, &*LITRE, &*CELSIUS,
    ];
    let system = named
        .into_iter()
        .fold(SystemOfUnits::new("SI"), |system, unit| system.with_unit(unit));

    let system = system
        .with_quantity(QuantityKind::Dimensionless, &ONE)
        .with_quantity(QuantityKind::Length, &METRE)
        .with_quantity(QuantityKind::Mass, &KILOGRAM)
        .with_quantity(QuantityKind::Time, &SECOND)
        .with_quantity(QuantityKind::ElectricCurrent, &AMPERE)
        .with_quantity(QuantityKind::Temperature, &KELVIN)
        .with_quantity(QuantityKind::AmountOfSubstance, &MOLE)
        .with_quantity(QuantityKind::LuminousIntensity, &CANDELA)
        .with_quantity(QuantityKind::Area, &square(&METRE))
        .with_quantity(QuantityKind::Volume, &METRE.pow(3).expect("m³"))
        .with_quantity(QuantityKind::Velocity, &per(&METRE, &SECOND))
        .with_quantity(QuantityKind::Acceleration, &per(&METRE, &square(&SECOND)))
        .with_quantity(
            QuantityKind::AngularAcceleration,
            &per(&RADIAN, &square(&SECOND)),
        )
        .with_quantity(QuantityKind::Frequency, &HERTZ)
        .with_quantity(QuantityKind::Force, &NEWTON)
        .with_quantity(QuantityKind::Pressure, &PASCAL)
        .with_quantity(QuantityKind::Energy, &JOULE)
        .with_quantity(QuantityKind::Power, &WATT)
        .with_quantity(QuantityKind::ElectricCharge, &COULOMB)
        .with_quantity(QuantityKind::ElectricPotential, &VOLT)
        .with_quantity(QuantityKind::Luminance, &per(&CANDELA, &square(&METRE)));

    tracing::debug!(
        "built {} system: {} units, {} quantity kinds",
        system.name(),
        system.units.len(),
        system.registry.len()
    );
    system
}
