//! SI metric prefixes (yotta through yocto).

use serde::{Deserialize, Serialize};

/// Decimal multiples and submultiples of a unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deka,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 20] = [
        MetricPrefix::Yotta,
        MetricPrefix::Zetta,
        MetricPrefix::Exa,
        MetricPrefix::Peta,
        MetricPrefix::Tera,
        MetricPrefix::Giga,
        MetricPrefix::Mega,
        MetricPrefix::Kilo,
        MetricPrefix::Hecto,
        MetricPrefix::Deka,
        MetricPrefix::Deci,
        MetricPrefix::Centi,
        MetricPrefix::Milli,
        MetricPrefix::Micro,
        MetricPrefix::Nano,
        MetricPrefix::Pico,
        MetricPrefix::Femto,
        MetricPrefix::Atto,
        MetricPrefix::Zepto,
        MetricPrefix::Yocto,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            MetricPrefix::Yotta => "Y",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Exa => "E",
            MetricPrefix::Peta => "P",
            MetricPrefix::Tera => "T",
            MetricPrefix::Giga => "G",
            MetricPrefix::Mega => "M",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Deka => "da",
            MetricPrefix::Deci => "d",
            MetricPrefix::Centi => "c",
            MetricPrefix::Milli => "m",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Nano => "n",
            MetricPrefix::Pico => "p",
            MetricPrefix::Femto => "f",
            MetricPrefix::Atto => "a",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Yocto => "y",
        }
    }

    /// Power of ten applied by this prefix
    pub fn exponent(&self) -> i32 {
        match self {
            MetricPrefix::Yotta => 24,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Exa => 18,
            MetricPrefix::Peta => 15,
            MetricPrefix::Tera => 12,
            MetricPrefix::Giga => 9,
            MetricPrefix::Mega => 6,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Deka => 1,
            MetricPrefix::Deci => -1,
            MetricPrefix::Centi => -2,
            MetricPrefix::Milli => -3,
            MetricPrefix::Micro => -6,
            MetricPrefix::Nano => -9,
            MetricPrefix::Pico => -12,
            MetricPrefix::Femto => -15,
            MetricPrefix::Atto => -18,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Yocto => -24,
        }
    }

    /// Scale factor, written as literals so each is the correctly rounded f64
    pub fn factor(&self) -> f64 {
        match self {
            MetricPrefix::Yotta => 1e24,
            MetricPrefix::Zetta => 1e21,
            MetricPrefix::Exa => 1e18,
            MetricPrefix::Peta => 1e15,
            MetricPrefix::Tera => 1e12,
            MetricPrefix::Giga => 1e9,
            MetricPrefix::Mega => 1e6,
            MetricPrefix::Kilo => 1e3,
            MetricPrefix::Hecto => 1e2,
            MetricPrefix::Deka => 1e1,
            MetricPrefix::Deci => 1e-1,
            MetricPrefix::Centi => 1e-2,
            MetricPrefix::Milli => 1e-3,
            MetricPrefix::Micro => 1e-6,
            MetricPrefix::Nano => 1e-9,
            MetricPrefix::Pico => 1e-12,
            MetricPrefix::Femto => 1e-15,
            MetricPrefix::Atto => 1e-18,
            MetricPrefix::Zepto => 1e-21,
            MetricPrefix::Yocto => 1e-24,
        }
    }
}
