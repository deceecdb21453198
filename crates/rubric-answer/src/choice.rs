use crate::error::{BuildError, MatchError};
use crate::mode::ChoiceMode;
use crate::options::Options;
use crate::registry::VariantTag;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SetRule {
    Equal,
    Subset,
    Disjoint,
}

#[derive(Debug, Clone, PartialEq)]
enum Accepted {
    /// Compared as a whole in `exact` mode.
    Whole(Value),
    /// Deduplicated tokens for the set modes.
    Tokens(Vec<Value>, SetRule),
}

/// A multiple-choice answer over scalar tokens.
///
/// A text reference or candidate is one token, never a sequence of
/// characters. Arrays are sequences of tokens.
#[derive(Debug, Clone)]
pub struct ChoiceAnswer {
    accepted: Accepted,
    mode: ChoiceMode,
    options: Options,
}

impl ChoiceAnswer {
    pub fn new(accepted: impl Into<Value>, mode: ChoiceMode, options: Options) -> Result<Self, BuildError> {
        let accepted = accepted.into();
        let rule = match mode {
            ChoiceMode::Exact if matches!(accepted, Value::Object(_)) => {
                return Err(invalid_reference(&accepted))
            }
            ChoiceMode::Exact => None,
            ChoiceMode::ExactMultiple => Some(SetRule::Equal),
            ChoiceMode::Include => Some(SetRule::Subset),
            ChoiceMode::Exclude => Some(SetRule::Disjoint),
        };
        let accepted = match rule {
            None => Accepted::Whole(accepted),
            Some(rule) => {
                let tokens = tokens(&accepted).map_err(|_| invalid_reference(&accepted))?;
                Accepted::Tokens(tokens, rule)
            }
        };
        Ok(Self {
            accepted,
            mode,
            options,
        })
    }

    pub fn mode(&self) -> ChoiceMode {
        self.mode
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn with_options(&self, overrides: &Options) -> Self {
        Self {
            options: self.options.merge(overrides),
            ..self.clone()
        }
    }

    pub fn matches_with(&self, candidate: &Value, _overrides: &Options) -> Result<bool, MatchError> {
        match &self.accepted {
            Accepted::Whole(accepted) => {
                if let Value::Object(_) = candidate {
                    return Err(candidate.mismatch("scalar or array"));
                }
                Ok(candidate == accepted)
            }
            Accepted::Tokens(accepted, rule) => {
                let candidates = tokens(candidate)?;
                let contains = |token: &Value| accepted.contains(token);
                Ok(match rule {
                    SetRule::Equal => {
                        candidates.len() == accepted.len() && candidates.iter().all(contains)
                    }
                    SetRule::Subset => candidates.iter().all(contains),
                    SetRule::Disjoint => !candidates.iter().any(contains),
                })
            }
        }
    }
}

/// Flattens a scalar or an array of scalars into distinct tokens.
fn tokens(value: &Value) -> Result<Vec<Value>, MatchError> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => return Err(value.mismatch("scalar or array")),
        scalar => std::slice::from_ref(scalar),
    };

    let mut tokens: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if matches!(item, Value::Array(_) | Value::Object(_)) {
            return Err(item.mismatch("scalar"));
        }
        if !tokens.contains(item) {
            tokens.push(item.clone());
        }
    }
    Ok(tokens)
}

fn invalid_reference(accepted: &Value) -> BuildError {
    BuildError::InvalidReference {
        variant: VariantTag::MultipleChoice,
        expected: "scalar or array of scalars",
        got: accepted.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(accepted: impl Into<Value>, mode: ChoiceMode) -> ChoiceAnswer {
        ChoiceAnswer::new(accepted, mode, Options::new()).unwrap()
    }

    fn check(answer: &ChoiceAnswer, candidate: impl Into<Value>) -> bool {
        answer.matches_with(&candidate.into(), &Options::new()).unwrap()
    }

    #[test]
    fn test_exact_single() {
        let a = choice("1", ChoiceMode::Exact);
        assert!(check(&a, "1"));
        assert!(!check(&a, "2"));
        assert!(!check(&a, vec!["1"]));
    }

    #[test]
    fn test_exact_sequence_keeps_order() {
        let a = choice(vec!["0", "1"], ChoiceMode::Exact);
        assert!(check(&a, vec!["0", "1"]));
        assert!(!check(&a, vec!["1", "0"]));
    }

    #[test]
    fn test_exact_multiple_ignores_order() {
        let a = choice(vec!["0", "1", "2"], ChoiceMode::ExactMultiple);
        assert!(check(&a, vec!["2", "0", "1"]));
        assert!(check(&a, vec!["2", "0", "1", "1"]));
        assert!(!check(&a, vec!["0", "1"]));
        assert!(!check(&a, vec!["0", "1", "2", "3"]));
    }

    #[test]
    fn test_include() {
        let a = choice(vec!["0", "1", "2"], ChoiceMode::Include);
        assert!(check(&a, vec!["0", "2"]));
        assert!(check(&a, "1"));
        assert!(check(&a, Vec::<Value>::new()));
        assert!(!check(&a, vec!["0", "1", "2", "3"]));
        assert!(!check(&a, "3"));
    }

    #[test]
    fn test_exclude() {
        let a = choice(vec!["0", "1", "2"], ChoiceMode::Exclude);
        assert!(check(&a, vec!["3", "4"]));
        assert!(check(&a, "5"));
        assert!(!check(&a, vec!["3", "1"]));
        assert!(!check(&a, "0"));
    }

    #[test]
    fn test_text_is_one_token() {
        let a = choice("012", ChoiceMode::Include);
        assert!(check(&a, "012"));
        assert!(!check(&a, "0"));
        assert!(!check(&a, vec!["0", "1", "2"]));
    }

    #[test]
    fn test_scalar_tokens_of_other_types() {
        let a = choice(vec![Value::Number(1.0), Value::Bool(true)], ChoiceMode::Include);
        assert!(check(&a, 1.0));
        assert!(check(&a, vec![Value::Bool(true)]));
        assert!(!check(&a, "1"));
    }

    #[test]
    fn test_shape_errors() {
        let object: Value = [("a", "b")].into_iter().collect();
        assert!(matches!(
            ChoiceAnswer::new(object.clone(), ChoiceMode::Include, Options::new()),
            Err(BuildError::InvalidReference { .. })
        ));
        assert!(ChoiceAnswer::new(vec![vec!["a"]], ChoiceMode::Include, Options::new()).is_err());

        let a = choice(vec!["a"], ChoiceMode::Include);
        assert!(matches!(
            a.matches_with(&object, &Options::new()),
            Err(MatchError::TypeMismatch { got: "object", .. })
        ));
        assert!(a.matches_with(&Value::from(vec![vec!["a"]]), &Options::new()).is_err());
    }
}
