//! Value converters between units.
//!
//! A [`Converter`] is a small immutable expression tree. Composition follows
//! function application order: `a.concatenate(&b)` converts with `b` first,
//! then `a`, i.e. `Compound(a, b).convert(x) == a.convert(b.convert(x))`.
//!
//! Concatenation simplifies where it can:
//! - anything concatenated with [`Converter::Identity`] is left unchanged
//! - two multipliers collapse into one (into `Identity` when the product is 1)
//! - two offsets collapse into one (into `Identity` when the sum is 0)
//!
//! A collapse whose result would leave the finite `f64` range is skipped and
//! both steps are kept as a compound.

use crate::math_context::MathContext;
use crate::{Error, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value transformation from one unit scale to another
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Converter {
    /// Leaves values unchanged
    Identity,
    /// `x * factor`
    Multiply(MultiplyConverter),
    /// `x + offset`
    Add(AddConverter),
    /// `base^x`
    Exp(ExpConverter),
    /// `log_base(x)`
    Log(LogConverter),
    /// `left(right(x))`
    Compound(CompoundConverter),
}

impl Converter {
    /// Scaling converter; rejects a factor of exactly 1.0.
    pub fn multiply(factor: f64) -> Result<Converter> {
        MultiplyConverter::new(factor).map(Converter::Multiply)
    }

    /// Offset converter; rejects an offset of exactly 0.0.
    pub fn add(offset: f64) -> Result<Converter> {
        AddConverter::new(offset).map(Converter::Add)
    }

    pub fn exp(base: f64) -> Result<Converter> {
        ExpConverter::new(base).map(Converter::Exp)
    }

    pub fn log(base: f64) -> Result<Converter> {
        LogConverter::new(base).map(Converter::Log)
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Converter::Identity)
    }

    /// Linear converters can be raised to integer powers by repeated
    /// concatenation.
    pub fn is_linear(&self) -> bool {
        match self {
            Converter::Identity | Converter::Multiply(_) => true,
            Converter::Add(_) | Converter::Exp(_) | Converter::Log(_) => false,
            Converter::Compound(c) => c.left.is_linear() && c.right.is_linear(),
        }
    }

    /// Whether `convert_decimal` stays in decimal arithmetic end to end.
    ///
    /// Exponential and logarithmic converters evaluate through `f64`.
    pub fn supports_decimal(&self) -> bool {
        match self {
            Converter::Identity | Converter::Multiply(_) | Converter::Add(_) => true,
            Converter::Exp(_) | Converter::Log(_) => false,
            Converter::Compound(c) => c.left.supports_decimal() && c.right.supports_decimal(),
        }
    }

    pub fn inverse(&self) -> Converter {
        match self {
            Converter::Identity => Converter::Identity,
            // `MultiplyConverter::new` guarantees a finite, non-zero reciprocal.
            Converter::Multiply(m) => {
                let factor = 1.0 / m.factor;
                if factor == 1.0 {
                    Converter::Identity
                } else {
                    Converter::Multiply(MultiplyConverter { factor })
                }
            }
            Converter::Add(a) => Converter::Add(AddConverter { offset: -a.offset }),
            Converter::Exp(e) => Converter::Log(LogConverter::from_base(e.base)),
            Converter::Log(l) => Converter::Exp(ExpConverter::from_base(l.base)),
            Converter::Compound(c) => Converter::Compound(CompoundConverter {
                left: Box::new(c.right.inverse()),
                right: Box::new(c.left.inverse()),
            }),
        }
    }

    /// Returns the converter equivalent to `self` applied after `that`.
    pub fn concatenate(&self, that: &Converter) -> Converter {
        match (self, that) {
            (_, Converter::Identity) => self.clone(),
            (Converter::Identity, _) => that.clone(),
            (Converter::Multiply(a), Converter::Multiply(b)) => {
                let factor = a.factor * b.factor;
                if factor == 1.0 {
                    Converter::Identity
                } else {
                    match MultiplyConverter::new(factor) {
                        Ok(m) => Converter::Multiply(m),
                        // Out of f64 range: keep both steps
                        Err(_) => self.compound(that),
                    }
                }
            }
            (Converter::Add(a), Converter::Add(b)) => {
                let offset = a.offset + b.offset;
                if offset == 0.0 {
                    Converter::Identity
                } else if offset.is_finite() {
                    Converter::Add(AddConverter { offset })
                } else {
                    self.compound(that)
                }
            }
            _ => self.compound(that),
        }
    }

    fn compound(&self, that: &Converter) -> Converter {
        Converter::Compound(CompoundConverter {
            left: Box::new(self.clone()),
            right: Box::new(that.clone()),
        })
    }

    pub fn convert(&self, value: f64) -> f64 {
        match self {
            Converter::Identity => value,
            Converter::Multiply(m) => value * m.factor,
            Converter::Add(a) => value + a.offset,
            Converter::Exp(e) => (e.log_of_base * value).exp(),
            Converter::Log(l) => value.ln() / l.log_of_base,
            Converter::Compound(c) => c.left.convert(c.right.convert(value)),
        }
    }

    /// Convert a decimal value, rounding each step to `ctx`.
    ///
    /// Multiplication and addition are exact whenever the result fits in a
    /// [`Decimal`]. A result that does not fit is an [`Error::Arithmetic`]
    /// under an unlimited context, and under a limited one when fewer than
    /// `ctx.precision` significant digits would survive.
    ///
    /// Compound converters whose children cannot both stay in decimal fall
    /// back to `f64` evaluation of the whole chain; precision beyond `f64`
    /// is lost in that case.
    pub fn convert_decimal(&self, value: Decimal, ctx: &MathContext) -> Result<Decimal> {
        match self {
            Converter::Identity => Ok(value),
            Converter::Multiply(m) => {
                let factor = decimal_from_f64(m.factor)?;
                if let Some(product) = exact_mul(value, factor) {
                    return ctx.round(product);
                }
                let product = value.checked_mul(factor).ok_or_else(|| {
                    Error::arithmetic(format!("overflow multiplying {} by {}", value, factor))
                })?;
                round_inexact(product, ctx, || format!("{} × {}", value, factor))
            }
            Converter::Add(a) => {
                let offset = decimal_from_f64(a.offset)?;
                if let Some(sum) = exact_add(value, offset) {
                    return ctx.round(sum);
                }
                let sum = value.checked_add(offset).ok_or_else(|| {
                    Error::arithmetic(format!("overflow adding {} to {}", offset, value))
                })?;
                round_inexact(sum, ctx, || format!("{} + {}", value, offset))
            }
            Converter::Exp(_) | Converter::Log(_) => self.convert_decimal_via_f64(value, ctx),
            Converter::Compound(c) => {
                if c.left.supports_decimal() && c.right.supports_decimal() {
                    let inner = c.right.convert_decimal(value, ctx)?;
                    c.left.convert_decimal(inner, ctx)
                } else {
                    tracing::trace!("compound converter {} falls back to f64", self);
                    self.convert_decimal_via_f64(value, ctx)
                }
            }
        }
    }

    /// Flatten into fundamental converters, left to right.
    pub fn compound_converters(&self) -> Vec<Converter> {
        match self {
            Converter::Compound(c) => {
                let mut converters = c.left.compound_converters();
                converters.extend(c.right.compound_converters());
                converters
            }
            other => vec![other.clone()],
        }
    }

    fn convert_decimal_via_f64(&self, value: Decimal, ctx: &MathContext) -> Result<Decimal> {
        let input = value
            .to_f64()
            .ok_or_else(|| Error::arithmetic(format!("{} is not representable as f64", value)))?;
        let output = self.convert(input);
        ctx.round(decimal_from_f64(output)?)
    }
}

/// Decimal closest to `value`, failing when the 28 fractional digits of a
/// [`Decimal`] cannot hold it to within a few ulps.
pub(crate) fn decimal_from_f64(value: f64) -> Result<Decimal> {
    let unrepresentable =
        || Error::arithmetic(format!("{} is not representable as a decimal", value));
    let decimal = Decimal::from_f64(value).ok_or_else(unrepresentable)?;
    let back = decimal.to_f64().ok_or_else(unrepresentable)?;
    if (back - value).abs() > 4.0 * f64::EPSILON * value.abs() {
        return Err(unrepresentable());
    }
    Ok(decimal)
}

/// `a * b` when the product fits in a [`Decimal`] without rounding.
fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    let mantissa = a.mantissa().checked_mul(b.mantissa())?;
    from_parts(mantissa, a.scale() + b.scale())
}

/// `a + b` when the sum fits in a [`Decimal`] without rounding.
fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    let scale = a.scale().max(b.scale());
    let align = |d: Decimal| {
        10i128
            .checked_pow(scale - d.scale())
            .and_then(|p| d.mantissa().checked_mul(p))
    };
    let mantissa = align(a)?.checked_add(align(b)?)?;
    from_parts(mantissa, scale)
}

fn from_parts(mut mantissa: i128, mut scale: u32) -> Option<Decimal> {
    while scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Round a result that `rust_decimal` already had to round to fit.
fn round_inexact(
    approx: Decimal,
    ctx: &MathContext,
    operation: impl FnOnce() -> String,
) -> Result<Decimal> {
    if ctx.is_unlimited() {
        return Err(Error::arithmetic(format!(
            "{} has no exact decimal representation",
            operation()
        )));
    }
    let retained = digits(approx.mantissa().unsigned_abs());
    if retained <= ctx.precision {
        return Err(Error::arithmetic(format!(
            "{} keeps only {} significant digits, {} requested",
            operation(),
            retained,
            ctx.precision
        )));
    }
    tracing::trace!("rounding inexact {} to {} digits", approx, ctx.precision);
    ctx.round(approx)
}

fn digits(mut n: u128) -> u32 {
    let mut count = 0;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}

fn check_finite(value: f64, what: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be finite, got {}", what, value)))
    }
}

/// Multiplies by a constant factor
#[derive(Clone, Copy, Debug)]
pub struct MultiplyConverter {
    factor: f64,
}

impl MultiplyConverter {
    pub fn new(factor: f64) -> Result<Self> {
        check_finite(factor, "factor")?;
        if factor == 1.0 {
            return Err(Error::invalid("factor 1.0 would result in identity converter"));
        }
        if factor == 0.0 || !(1.0 / factor).is_finite() {
            return Err(Error::invalid(format!("factor {} is not invertible", factor)));
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// Adds a constant offset
#[derive(Clone, Copy, Debug)]
pub struct AddConverter {
    offset: f64,
}

impl AddConverter {
    pub fn new(offset: f64) -> Result<Self> {
        check_finite(offset, "offset")?;
        if offset == 0.0 {
            return Err(Error::invalid("offset 0.0 would result in identity converter"));
        }
        Ok(Self { offset })
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

fn check_base(base: f64) -> Result<()> {
    check_finite(base, "base")?;
    if base <= 0.0 || base == 1.0 {
        return Err(Error::invalid(format!(
            "base must be positive and different from 1, got {}",
            base
        )));
    }
    Ok(())
}

/// Raises a base to the value: `base^x`
#[derive(Clone, Copy, Debug)]
pub struct ExpConverter {
    base: f64,
    log_of_base: f64,
}

impl ExpConverter {
    pub fn new(base: f64) -> Result<Self> {
        check_base(base)?;
        Ok(Self::from_base(base))
    }

    fn from_base(base: f64) -> Self {
        Self {
            base,
            log_of_base: base.ln(),
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

/// Logarithm of the value in a base: `log_base(x)`
#[derive(Clone, Copy, Debug)]
pub struct LogConverter {
    base: f64,
    log_of_base: f64,
}

impl LogConverter {
    pub fn new(base: f64) -> Result<Self> {
        check_base(base)?;
        Ok(Self::from_base(base))
    }

    fn from_base(base: f64) -> Self {
        Self {
            base,
            log_of_base: base.ln(),
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

/// Composition of two converters: `left(right(x))`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompoundConverter {
    left: Box<Converter>,
    right: Box<Converter>,
}

impl CompoundConverter {
    pub fn left(&self) -> &Converter {
        &self.left
    }

    pub fn right(&self) -> &Converter {
        &self.right
    }
}

// Float-backed converters compare by bit pattern. Construction rejects NaN and
// zero factors, so this agrees with numeric equality for every reachable value.
macro_rules! impl_float_identity {
    ($ty:ty, $field:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$field.to_bits() == other.$field.to_bits()
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.$field.to_bits().hash(state);
            }
        }
    };
}

impl_float_identity!(MultiplyConverter, factor);
impl_float_identity!(AddConverter, offset);
impl_float_identity!(ExpConverter, base);
impl_float_identity!(LogConverter, base);

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converter::Identity => write!(f, "Identity"),
            Converter::Multiply(m) => write!(f, "Multiply({})", m.factor),
            Converter::Add(a) => write!(f, "Add({})", a.offset),
            Converter::Exp(e) if e.base == std::f64::consts::E => write!(f, "e"),
            Converter::Exp(e) => write!(f, "Exp({})", e.base),
            Converter::Log(l) if l.base == std::f64::consts::E => write!(f, "ln"),
            Converter::Log(l) => write!(f, "Log({})", l.base),
            Converter::Compound(c) => write!(f, "{} ∘ {}", c.left, c.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::f64::consts::E;

    const TOLERANCE: f64 = 1e-9;

    fn samples() -> Vec<Converter> {
        vec![
            Converter::Identity,
            Converter::multiply(2.54).unwrap(),
            Converter::multiply(-0.001).unwrap(),
            Converter::multiply(1000.0)
                .unwrap()
                .concatenate(&Converter::add(273.15).unwrap()),
        ]
    }

    #[test]
    fn test_multiply_by_one_rejected() {
        assert!(matches!(
            Converter::multiply(1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            MultiplyConverter::new(1.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_degenerate_converters_rejected() {
        assert!(Converter::multiply(0.0).is_err());
        assert!(Converter::multiply(f64::NAN).is_err());
        assert!(Converter::add(0.0).is_err());
        assert!(Converter::exp(1.0).is_err());
        assert!(Converter::log(-2.0).is_err());
        assert!(Converter::log(f64::INFINITY).is_err());
    }

    #[test]
    fn test_concatenate_identity_elided() {
        for c in samples() {
            assert_eq!(c.concatenate(&Converter::Identity), c);
            assert_eq!(Converter::Identity.concatenate(&c), c);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        for c in samples() {
            for x in [-12.5, 0.0, 1.0, 42.0, 1e6] {
                let back = c.inverse().convert(c.convert(x));
                assert!((back - x).abs() < TOLERANCE * x.abs().max(1.0), "{} on {}", c, x);
            }
        }
    }

    #[test]
    fn test_multiply_collapse_to_identity() {
        let c = Converter::multiply(2.0)
            .unwrap()
            .concatenate(&Converter::multiply(0.5).unwrap());
        assert_eq!(c, Converter::Identity);
    }

    #[test]
    fn test_multiply_collapse() {
        let c = Converter::multiply(2.0)
            .unwrap()
            .concatenate(&Converter::multiply(3.0).unwrap());
        assert_eq!(c, Converter::multiply(6.0).unwrap());
    }

    #[test]
    fn test_add_collapse() {
        let shift = Converter::add(273.15).unwrap();
        assert_eq!(shift.concatenate(&shift.inverse()), Converter::Identity);
    }

    #[test]
    fn test_multiply_inverse_exact() {
        let c = Converter::multiply(4.0).unwrap();
        assert_eq!(c.inverse(), Converter::multiply(0.25).unwrap());
        assert_eq!(c.inverse().inverse(), c);
    }

    #[test]
    fn test_exp_log_inverse() {
        let exp = Converter::exp(E).unwrap();
        let log = Converter::log(E).unwrap();
        assert_eq!(exp.inverse(), log);
        assert_eq!(log.inverse(), exp);

        let back = exp.inverse().convert(exp.convert(10.0));
        assert!((back - 10.0).abs() < TOLERANCE);
        let back = log.inverse().convert(log.convert(10.0));
        assert!((back - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_log_base_ten() {
        let log10 = Converter::log(10.0).unwrap();
        assert!((log10.convert(1000.0) - 3.0).abs() < TOLERANCE);
        assert!((log10.inverse().convert(2.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compound_order() {
        // Multiply after add: (x + 1) * 4
        let c = Converter::multiply(4.0)
            .unwrap()
            .concatenate(&Converter::add(1.0).unwrap());
        assert_eq!(c.convert(2.0), 12.0);

        let inverse = c.inverse();
        assert_eq!(inverse.convert(12.0), 2.0);
        let parts = inverse.compound_converters();
        assert_eq!(parts[0], Converter::add(-1.0).unwrap());
        assert_eq!(parts[1], Converter::multiply(0.25).unwrap());
    }

    #[test]
    fn test_linearity() {
        assert!(Converter::Identity.is_linear());
        assert!(Converter::multiply(3.0).unwrap().is_linear());
        assert!(!Converter::add(3.0).unwrap().is_linear());
        assert!(!Converter::exp(2.0).unwrap().is_linear());

        let mixed = Converter::multiply(3.0)
            .unwrap()
            .concatenate(&Converter::log(10.0).unwrap());
        assert!(!mixed.is_linear());
    }

    #[test]
    fn test_compound_converters_flatten() {
        let a = Converter::multiply(2.0).unwrap();
        let b = Converter::exp(2.0).unwrap();
        let c = Converter::add(5.0).unwrap();
        let chain = a.concatenate(&b).concatenate(&c);
        assert_eq!(chain.compound_converters(), vec![a.clone(), b, c]);
        assert_eq!(a.compound_converters(), vec![a]);
    }

    #[test]
    fn test_decimal_multiply_is_exact() {
        let c = Converter::multiply(0.1).unwrap();
        let result = c.convert_decimal(dec!(3), &MathContext::UNLIMITED).unwrap();
        assert_eq!(result, dec!(0.3));
        assert_ne!(c.convert(3.0), 0.3);
    }

    #[test]
    fn test_decimal_respects_precision() {
        let c = Converter::multiply(1.0 / 3.0).unwrap();
        let ctx = MathContext::new(3, crate::Rounding::HalfEven);
        let result = c.convert_decimal(dec!(1), &ctx).unwrap();
        assert_eq!(result, dec!(0.333));
    }

    #[test]
    fn test_decimal_compound_stays_decimal() {
        let c = Converter::add(273.15)
            .unwrap()
            .concatenate(&Converter::multiply(0.1).unwrap());
        assert!(c.supports_decimal());
        let result = c.convert_decimal(dec!(5), &MathContext::UNLIMITED).unwrap();
        assert_eq!(result, dec!(273.65));
    }

    #[test]
    fn test_decimal_compound_falls_back_to_float() {
        let c = Converter::multiply(0.1)
            .unwrap()
            .concatenate(&Converter::exp(10.0).unwrap());
        assert!(!c.supports_decimal());

        let result = c.convert_decimal(dec!(2), &MathContext::UNLIMITED).unwrap();
        let expected = Decimal::from_f64(c.convert(2.0)).unwrap();
        assert_eq!(result, expected);
        assert!((result.to_f64().unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_overflow_is_arithmetic_error() {
        let c = Converter::multiply(1e20).unwrap();
        let result = c.convert_decimal(Decimal::MAX, &MathContext::UNLIMITED);
        assert!(matches!(result, Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_decimal_non_finite_fallback_is_arithmetic_error() {
        let c = Converter::log(10.0).unwrap();
        let result = c.convert_decimal(dec!(-1), &MathContext::UNLIMITED);
        assert!(matches!(result, Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_decimal_tiny_factor_is_arithmetic_error() {
        for factor in [1e-30, 1.234567e-27] {
            let c = Converter::multiply(factor).unwrap();
            let result = c.convert_decimal(dec!(1), &MathContext::UNLIMITED);
            assert!(matches!(result, Err(Error::Arithmetic(_))), "{}", factor);
        }
    }

    #[test]
    fn test_decimal_unlimited_rejects_truncation() {
        let c = Converter::multiply(1e-20).unwrap();
        let result = c.convert_decimal(dec!(0.1234567890123456789), &MathContext::UNLIMITED);
        assert!(matches!(result, Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_decimal_limited_rounds_past_scale_limit() {
        let c = Converter::multiply(1e-20).unwrap();
        let value = dec!(0.1234567890123456789);

        let ctx = MathContext::new(5, crate::Rounding::HalfEven);
        let result = c.convert_decimal(value, &ctx).unwrap();
        assert_eq!(result, dec!(0.0000000000000000000012346));

        // Only eight digits fit below the scale limit
        let ctx = MathContext::new(10, crate::Rounding::HalfEven);
        assert!(matches!(
            c.convert_decimal(value, &ctx),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_decimal_exact_add() {
        let c = Converter::add(0.5).unwrap();
        let result = c
            .convert_decimal(dec!(0.0000000000000000000000000001), &MathContext::UNLIMITED)
            .unwrap();
        assert_eq!(result, dec!(0.5000000000000000000000000001));
    }

    #[test]
    fn test_non_invertible_factor_rejected() {
        assert!(Converter::multiply(f64::MIN_POSITIVE / 16.0).is_err());
        assert!(Converter::multiply(f64::INFINITY).is_err());
    }

    #[test]
    fn test_multiply_collapse_out_of_range_stays_compound() {
        let big = Converter::multiply(1e200).unwrap();
        let c = big.concatenate(&big);
        assert!(matches!(c, Converter::Compound(_)));
        assert_eq!(c.compound_converters(), vec![big.clone(), big]);

        let x = 1e-200;
        let y = c.convert(x);
        assert!((y - 1e200).abs() < 1e200 * TOLERANCE);
        let back = c.inverse().convert(y);
        assert!(back.is_finite());
        assert!((back - x).abs() < x * TOLERANCE);
    }

    #[test]
    fn test_add_collapse_out_of_range_stays_compound() {
        let shift = Converter::add(f64::MAX).unwrap();
        assert!(matches!(shift.concatenate(&shift), Converter::Compound(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Converter::exp(E).unwrap().to_string(), "e");
        assert_eq!(Converter::multiply(2.5).unwrap().to_string(), "Multiply(2.5)");
        let chain = Converter::multiply(2.0)
            .unwrap()
            .concatenate(&Converter::add(1.0).unwrap());
        assert_eq!(chain.to_string(), "Multiply(2) ∘ Add(1)");
    }
}
