//! Match options and their merge semantics.

use crate::error::BuildError;
use crate::value::Value;
use rubric_numeric::RangeMode;

/// Options attached to an answer, or passed for a single match call.
///
/// Every field is optional; an absent field falls back to the stored value
/// and then to the variant default (`digits` 2, `rangemode` inclusive,
/// `ignorecase` true, `minimum` the candidate length).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub digits: Option<u32>,
    pub range_mode: Option<RangeMode>,
    pub ignore_case: Option<bool>,
    pub minimum: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn range_mode(mut self, range_mode: RangeMode) -> Self {
        self.range_mode = Some(range_mode);
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = Some(ignore_case);
        self
    }

    pub fn minimum(mut self, minimum: usize) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a new bag where fields set in `overrides` win and the rest
    /// are kept from `self`.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            digits: overrides.digits.or(self.digits),
            range_mode: overrides.range_mode.or(self.range_mode),
            ignore_case: overrides.ignore_case.or(self.ignore_case),
            minimum: overrides.minimum.or(self.minimum),
        }
    }

    /// Reads an options object such as `{"digits": 3, "rangemode": "exclusive"}`.
    ///
    /// `null` reads as no options. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, BuildError> {
        let entries = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(entries) => entries,
            other => {
                return Err(BuildError::InvalidOption {
                    key: "options".to_string(),
                    reason: format!("expected object, got {}", other.type_name()),
                })
            }
        };

        let mut options = Self::default();
        for (key, value) in entries {
            match key.as_str() {
                "digits" => options.digits = Some(whole_number(key, value, u32::MAX as u64)? as u32),
                "rangemode" | "range_mode" => {
                    let name = match value {
                        Value::String(name) => name,
                        other => return Err(invalid(key, "a range mode name", other)),
                    };
                    let mode = name.parse::<RangeMode>().map_err(|e| {
                        BuildError::InvalidOption {
                            key: key.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    options.range_mode = Some(mode);
                }
                "ignorecase" | "ignore_case" => match value {
                    Value::Bool(b) => options.ignore_case = Some(*b),
                    other => return Err(invalid(key, "a bool", other)),
                },
                "minimum" => {
                    options.minimum = match value {
                        Value::Null => None,
                        other => Some(whole_number(key, other, usize::MAX as u64)? as usize),
                    }
                }
                _ => tracing::debug!(option = %key, "ignoring unknown option"),
            }
        }
        Ok(options)
    }
}

fn whole_number(key: &str, value: &Value, max: u64) -> Result<u64, BuildError> {
    match value {
        Value::Number(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= max as f64 => Ok(*n as u64),
        other => Err(invalid(key, "a non-negative integer", other)),
    }
}

fn invalid(key: &str, expected: &str, got: &Value) -> BuildError {
    BuildError::InvalidOption {
        key: key.to_string(),
        reason: format!("expected {}, got {}", expected, got),
    }
}
