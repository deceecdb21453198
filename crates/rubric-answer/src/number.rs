use crate::error::{BuildError, MatchError};
use crate::mode::NumberMode;
use crate::options::Options;
use crate::registry::VariantTag;
use crate::value::Value;
use rubric_numeric::{Numeric, DEFAULT_DIGITS};

/// The literal(s) a number answer was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberReference {
    Exact(String),
    /// `(low, high)`. `low <= high` is the caller's responsibility.
    Range(String, String),
}

impl From<&str> for NumberReference {
    fn from(literal: &str) -> Self {
        NumberReference::Exact(literal.to_string())
    }
}

impl From<String> for NumberReference {
    fn from(literal: String) -> Self {
        NumberReference::Exact(literal)
    }
}

impl From<(&str, &str)> for NumberReference {
    fn from((low, high): (&str, &str)) -> Self {
        NumberReference::Range(low.to_string(), high.to_string())
    }
}

impl From<(String, String)> for NumberReference {
    fn from((low, high): (String, String)) -> Self {
        NumberReference::Range(low, high)
    }
}

#[derive(Debug, Clone)]
enum Target {
    Exact(Numeric),
    Range(Numeric, Numeric),
}

#[derive(Debug, Clone)]
pub struct NumberAnswer {
    reference: NumberReference,
    target: Target,
    mode: NumberMode,
    options: Options,
}

impl NumberAnswer {
    /// Parses the reference literal(s). Fractions are divided at
    /// `options.digits` (default 2) precision; plain decimals keep theirs.
    pub fn new(
        reference: impl Into<NumberReference>,
        mode: NumberMode,
        options: Options,
    ) -> Result<Self, BuildError> {
        let reference = reference.into();
        let digits = options.digits.unwrap_or(DEFAULT_DIGITS);
        let target = match &reference {
            NumberReference::Exact(literal) => Target::Exact(parse(literal, digits)?),
            NumberReference::Range(low, high) => {
                Target::Range(parse(low, digits)?, parse(high, digits)?)
            }
        };
        Ok(Self {
            reference,
            target,
            mode,
            options,
        })
    }

    pub fn reference(&self) -> &NumberReference {
        &self.reference
    }

    pub fn mode(&self) -> NumberMode {
        self.mode
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a copy with `overrides` merged into the stored options. A
    /// `digits` override re-parses the reference at the new precision.
    pub fn with_options(&self, overrides: &Options) -> Result<Self, BuildError> {
        Self::new(self.reference.clone(), self.mode, self.options.merge(overrides))
    }

    pub fn matches_with(&self, candidate: &Value, overrides: &Options) -> Result<bool, MatchError> {
        let text = candidate.as_str()?;
        match self.mode {
            NumberMode::Roundoff => Ok(self.roundoff(text, &self.options.merge(overrides))),
            NumberMode::Sigfig => Err(MatchError::Unsupported {
                variant: VariantTag::Number,
                mode: NumberMode::Sigfig.name(),
            }),
        }
    }

    fn roundoff(&self, candidate: &str, options: &Options) -> bool {
        let digits = options.digits.unwrap_or(DEFAULT_DIGITS);
        let value = match rubric_numeric::canonicalize(candidate, digits) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(candidate, error = %e, "candidate is not a number");
                return false;
            }
        };

        match &self.target {
            Target::Exact(reference) => reference.same_as(&value, digits),
            Target::Range(low, high) => {
                let range_mode = options.range_mode.unwrap_or_default();
                range_mode.contains(&low.round(digits), &value, &high.round(digits))
            }
        }
    }
}

fn parse(literal: &str, digits: u32) -> Result<Numeric, BuildError> {
    rubric_numeric::parse(literal, digits).map_err(|source| BuildError::InvalidNumber {
        literal: literal.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubric_numeric::RangeMode;

    fn exact(literal: &str) -> NumberAnswer {
        NumberAnswer::new(literal, NumberMode::Roundoff, Options::new()).unwrap()
    }

    fn check(answer: &NumberAnswer, candidate: &str) -> bool {
        answer.matches_with(&Value::from(candidate), &Options::new()).unwrap()
    }

    #[test]
    fn test_fraction_reference() {
        let answer = exact("11/10");
        assert!(check(&answer, "1.1"));
        assert!(check(&answer, "1.10"));
        assert!(check(&answer, " 11/10 "));
        assert!(!check(&answer, "1.15"));
        assert!(!check(&answer, "21/20"));
    }

    #[test]
    fn test_non_numeric_candidate_never_matches() {
        let answer = exact("3");
        assert!(!check(&answer, "three"));
        assert!(!check(&answer, ""));
    }

    #[test]
    fn test_digit_separators_never_match() {
        let answer = exact("10");
        assert!(check(&answer, "10"));
        assert!(!check(&answer, "1_0"));
    }

    #[test]
    fn test_oversized_fraction_reference() {
        assert!(matches!(
            NumberAnswer::new(
                "100000000000000000000000000000/3",
                NumberMode::Roundoff,
                Options::new()
            ),
            Err(BuildError::InvalidNumber {
                source: rubric_numeric::NumericError::OutOfRange(_),
                ..
            })
        ));
    }

    #[test]
    fn test_non_text_candidate_is_type_mismatch() {
        let answer = exact("3");
        assert_eq!(
            answer.matches_with(&Value::Number(3.0), &Options::new()),
            Err(MatchError::TypeMismatch {
                expected: "string",
                got: "number"
            })
        );
    }

    #[test]
    fn test_zero_denominator_reference() {
        let answer = exact("0/0");
        assert!(!check(&answer, "0"));
        assert!(!check(&answer, "0/0"));
        assert!(!check(&answer, "NaN"));
    }

    #[test]
    fn test_zero_reference() {
        let answer = exact("0");
        assert!(!check(&answer, "0/0"));
        assert!(check(&answer, "0.000000000001"));
        assert!(check(&answer, "-0"));
    }

    #[test]
    fn test_per_call_digits() {
        let answer = exact("1.39412");
        let at = |digits| Options::new().digits(digits);
        assert!(!answer.matches_with(&Value::from("1.39"), &at(3)).unwrap());
        assert!(answer.matches_with(&Value::from("1.39"), &at(2)).unwrap());
        assert!(answer.matches_with(&Value::from("1.4"), &at(1)).unwrap());
        // overrides are not persisted
        assert_eq!(answer.options().digits, None);
    }

    #[test]
    fn test_fraction_precision_fixed_at_construction() {
        let answer = exact("2/3");
        // 0.67 at construction, compared at four digits
        assert!(answer
            .matches_with(&Value::from("0.67"), &Options::new().digits(4))
            .unwrap());
        assert!(!answer
            .matches_with(&Value::from("0.6667"), &Options::new().digits(4))
            .unwrap());

        let rebuilt = answer.with_options(&Options::new().digits(4)).unwrap();
        assert!(check(&rebuilt, "0.6667"));
        assert!(!check(&rebuilt, "0.67"));
    }

    #[test]
    fn test_range() {
        let answer = NumberAnswer::new(
            ("1/2", "1"),
            NumberMode::Roundoff,
            Options::new().range_mode(RangeMode::InclusiveLow),
        )
        .unwrap();
        assert!(check(&answer, "0.5"));
        assert!(check(&answer, "0.99"));
        assert!(!check(&answer, "1"));
        assert!(!check(&answer, "0.4"));

        let inclusive = Options::new().range_mode(RangeMode::Inclusive);
        assert!(answer.matches_with(&Value::from("1"), &inclusive).unwrap());
    }

    #[test]
    fn test_range_rounds_bounds_per_call() {
        let answer =
            NumberAnswer::new(("0.994", "2"), NumberMode::Roundoff, Options::new()).unwrap();
        // low rounds to 0.99 at two digits but stays 0.994 at three
        assert!(check(&answer, "0.99"));
        assert!(!answer
            .matches_with(&Value::from("0.99"), &Options::new().digits(3))
            .unwrap());
    }

    #[test]
    fn test_sigfig_is_unsupported() {
        let answer = NumberAnswer::new("3", NumberMode::Sigfig, Options::new()).unwrap();
        assert_eq!(
            answer.matches_with(&Value::from("3"), &Options::new()),
            Err(MatchError::Unsupported {
                variant: VariantTag::Number,
                mode: "sigfig"
            })
        );
    }

    #[test]
    fn test_invalid_reference() {
        let err = NumberAnswer::new("eleven", NumberMode::Roundoff, Options::new()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidNumber { ref literal, .. } if literal == "eleven"));
        assert!(NumberAnswer::new(("1", "x"), NumberMode::Roundoff, Options::new()).is_err());
    }
}
