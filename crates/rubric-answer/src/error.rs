use crate::registry::VariantTag;
use rubric_numeric::NumericError;
use rubric_pattern::PatternError;
use thiserror::Error;

/// Failures while constructing an answer specification.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("invalid number '{literal}': {source}")]
    InvalidNumber {
        literal: String,
        #[source]
        source: NumericError,
    },

    #[error("unknown match mode '{mode}' for {variant}")]
    UnknownMatchMode { variant: VariantTag, mode: String },

    #[error("unknown answer variant '{0}'")]
    UnknownVariant(String),

    #[error("invalid reference for {variant}: expected {expected}, got {got}")]
    InvalidReference {
        variant: VariantTag,
        expected: &'static str,
        got: &'static str,
    },

    #[error("malformed compact answer: {0}")]
    MalformedCompact(String),

    #[error("invalid option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },
}

/// Failures while matching a candidate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("match mode '{mode}' of {variant} is not supported")]
    Unsupported {
        variant: VariantTag,
        mode: &'static str,
    },
}
