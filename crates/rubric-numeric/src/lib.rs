//! Numeric literal canonicalization for answer matching.
//!
//! Supports:
//! - Plain decimals: `42`, `-3.14`, `0.50`, `-1.5e3`
//! - Fractions: `11/10`, `-1/3` (a zero denominator yields [`Numeric::NaN`])
//! - Scientific notation: `1.5e3`, `2e-4` (the mantissa is always rounded to
//!   two digits and the value becomes a float)
//!
//! Values compare by their rendering after rounding to a shared precision,
//! and ranges are checked under one of four boundary policies.
//!
//! # Example
//!
//! ```
//! use rubric_numeric::{canonicalize, RangeMode};
//!
//! let reference = canonicalize("11/10", 2).unwrap();
//! assert!(reference.same_as(&canonicalize("1.1", 2).unwrap(), 2));
//! assert!(!reference.same_as(&canonicalize("21/20", 2).unwrap(), 2));
//!
//! let low = canonicalize("1/2", 2).unwrap();
//! let high = canonicalize("1", 2).unwrap();
//! let value = canonicalize("0.5", 2).unwrap();
//! assert!(RangeMode::InclusiveLow.contains(&low, &value, &high));
//! assert!(!RangeMode::Exclusive.contains(&low, &value, &high));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Rounding precision used when none is configured.
pub const DEFAULT_DIGITS: u32 = 2;

/// Scientific-notation mantissas are rounded to this many digits regardless
/// of the requested precision.
pub const SCIENTIFIC_MANTISSA_DIGITS: u32 = 2;

// ============ Errors ============

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("invalid numeric literal: {0:?}")]
    Invalid(String),
    #[error("numeric literal out of range: {0:?}")]
    OutOfRange(String),
    #[error("unknown range mode: {0:?} (expected inclusive, exclusive, inclusive_low or inclusive_high)")]
    UnknownRangeMode(String),
}

// ============ Literal Shapes ============

/// The textual shape of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    /// `-?\d+/\d+`
    Fraction {
        numerator: &'a str,
        denominator: &'a str,
    },
    /// `[0-9.]+e[+-]?\d+`
    Scientific { mantissa: &'a str, exponent: &'a str },
    /// Anything else, handed to the decimal parser as is.
    Plain(&'a str),
}

fn fraction<'a>(input: &mut &'a str) -> ModalResult<Literal<'a>> {
    let numerator: &'a str = (opt('-'), digit1).take().parse_next(input)?;
    '/'.parse_next(input)?;
    let denominator: &'a str = digit1.parse_next(input)?;
    Ok(Literal::Fraction {
        numerator,
        denominator,
    })
}

fn scientific<'a>(input: &mut &'a str) -> ModalResult<Literal<'a>> {
    let mantissa: &'a str =
        take_while(1.., |c: char| c.is_ascii_digit() || c == '.').parse_next(input)?;
    'e'.parse_next(input)?;
    let exponent: &'a str = (opt(one_of(['+', '-'])), digit1)
        .take()
        .parse_next(input)?;
    Ok(Literal::Scientific { mantissa, exponent })
}

impl<'a> Literal<'a> {
    /// Classifies a literal. The whole (trimmed) text must fit the fraction
    /// or scientific shape, otherwise it is plain.
    pub fn classify(text: &'a str) -> Self {
        let text = text.trim();
        let mut input = text;
        match alt((fraction, scientific)).parse_next(&mut input) {
            Ok(literal) if input.is_empty() => literal,
            _ => Literal::Plain(text),
        }
    }
}

// ============ Values ============

/// A canonicalized number.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    /// Exact decimal (plain literals and fractions).
    Decimal(Decimal),
    /// Binary float (scientific-notation literals).
    Float(f64),
    /// Result of a zero-denominator fraction. Never equal to or inside anything.
    NaN,
}

impl Numeric {
    pub fn is_nan(&self) -> bool {
        match self {
            Numeric::Decimal(_) => false,
            Numeric::Float(f) => f.is_nan(),
            Numeric::NaN => true,
        }
    }

    /// Rounds decimals half-to-even to exactly `digits` fractional digits.
    /// Floats and NaN are returned unchanged.
    pub fn round(&self, digits: u32) -> Numeric {
        match self {
            Numeric::Decimal(d) => Numeric::Decimal(round_decimal(*d, digits)),
            other => *other,
        }
    }

    /// Two values are the same iff their renderings after rounding to
    /// `digits` are identical.
    pub fn same_as(&self, other: &Numeric, digits: u32) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.round(digits).to_string() == other.round(digits).to_string()
    }

    fn to_f64(self) -> Option<f64> {
        match self {
            Numeric::Decimal(d) => d.to_f64(),
            Numeric::Float(f) => Some(f),
            Numeric::NaN => None,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Decimal(a), Numeric::Decimal(b)) => Some(a.cmp(b)),
            (Numeric::NaN, _) | (_, Numeric::NaN) => None,
            _ => self.to_f64()?.partial_cmp(&other.to_f64()?),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Decimal(d) => write!(f, "{}", d),
            Numeric::Float(x) => write!(f, "{:?}", x),
            Numeric::NaN => f.write_str("NaN"),
        }
    }
}

fn round_decimal(value: Decimal, digits: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    // pad so that 1.1 and 1.10 render the same
    rounded.rescale(digits);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

fn decimal(text: &str, literal: &str) -> Result<Decimal, NumericError> {
    // rust_decimal tolerates `_` separators
    if text.contains('_') {
        return Err(NumericError::Invalid(literal.to_string()));
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| {
            if is_plain_decimal(text) {
                NumericError::OutOfRange(literal.to_string())
            } else {
                NumericError::Invalid(literal.to_string())
            }
        })
}

/// `-?\d+(\.\d*)?`, the only shape whose parse failure means overflow.
fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

// ============ Range Policies ============

/// Boundary policy for range answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeMode {
    #[default]
    Inclusive,
    Exclusive,
    InclusiveLow,
    InclusiveHigh,
}

impl RangeMode {
    pub fn contains(self, low: &Numeric, value: &Numeric, high: &Numeric) -> bool {
        match self {
            RangeMode::Inclusive => low <= value && value <= high,
            RangeMode::Exclusive => low < value && value < high,
            RangeMode::InclusiveLow => low <= value && value < high,
            RangeMode::InclusiveHigh => low < value && value <= high,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RangeMode::Inclusive => "inclusive",
            RangeMode::Exclusive => "exclusive",
            RangeMode::InclusiveLow => "inclusive_low",
            RangeMode::InclusiveHigh => "inclusive_high",
        }
    }
}

impl FromStr for RangeMode {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inclusive" => Ok(RangeMode::Inclusive),
            "exclusive" => Ok(RangeMode::Exclusive),
            "inclusive_low" => Ok(RangeMode::InclusiveLow),
            "inclusive_high" => Ok(RangeMode::InclusiveHigh),
            _ => Err(NumericError::UnknownRangeMode(s.to_string())),
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============ Public API ============

/// Parses a literal into the value a reference answer stores.
///
/// Fractions are divided and rounded to `digits` here, so their precision is
/// fixed at construction time. Plain decimals keep their full precision.
pub fn parse(literal: &str, digits: u32) -> Result<Numeric, NumericError> {
    match Literal::classify(literal) {
        Literal::Fraction {
            numerator,
            denominator,
        } => {
            let numerator = decimal(numerator, literal)?;
            let denominator = decimal(denominator, literal)?;
            if denominator.is_zero() {
                return Ok(Numeric::NaN);
            }
            let quotient = numerator
                .checked_div(denominator)
                .ok_or_else(|| NumericError::OutOfRange(literal.to_string()))?;
            Ok(Numeric::Decimal(round_decimal(quotient, digits)))
        }
        Literal::Scientific { mantissa, exponent } => {
            let mantissa = round_decimal(decimal(mantissa, literal)?, SCIENTIFIC_MANTISSA_DIGITS);
            format!("{}e{}", mantissa, exponent)
                .parse::<f64>()
                .map(Numeric::Float)
                .map_err(|_| NumericError::Invalid(literal.to_string()))
        }
        Literal::Plain(text) => decimal(text, literal).map(Numeric::Decimal),
    }
}

/// Parses a literal and rounds it to `digits`.
pub fn canonicalize(literal: &str, digits: u32) -> Result<Numeric, NumericError> {
    parse(literal, digits).map(|value| value.round(digits))
}
