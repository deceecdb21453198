use crate::error::{BuildError, MatchError};
use crate::mode::StringMode;
use crate::options::Options;
use crate::value::Value;
use rubric_pattern::Pattern;

#[derive(Debug, Clone)]
enum Comparison {
    /// Lowercased reference.
    Folded(String),
    Exact,
    Compiled(Pattern),
}

/// A text answer. Reference and candidates are compared whitespace-trimmed.
#[derive(Debug, Clone)]
pub struct StringAnswer {
    reference: String,
    mode: StringMode,
    comparison: Comparison,
    options: Options,
}

impl StringAnswer {
    pub fn new(reference: &str, mode: StringMode, options: Options) -> Result<Self, BuildError> {
        let reference = reference.trim().to_string();
        let comparison = match mode {
            StringMode::IgnoreCase => Comparison::Folded(reference.to_lowercase()),
            StringMode::Exact => Comparison::Exact,
            StringMode::Pattern => Comparison::Compiled(Pattern::wildcard(&reference)?),
            StringMode::Regex => Comparison::Compiled(Pattern::regex(&reference)?),
        };
        Ok(Self {
            reference,
            mode,
            comparison,
            options,
        })
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn mode(&self) -> StringMode {
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

    pub fn matches_with(&self, candidate: &Value, overrides: &Options) -> Result<bool, MatchError> {
        let candidate = candidate.as_str()?.trim();
        Ok(match &self.comparison {
            Comparison::Folded(folded) => candidate.to_lowercase() == *folded,
            Comparison::Exact => candidate == self.reference,
            Comparison::Compiled(pattern) => {
                let ignore_case = overrides
                    .ignore_case
                    .or(self.options.ignore_case)
                    .unwrap_or(true);
                pattern.is_match(candidate, ignore_case)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(reference: &str, mode: StringMode) -> StringAnswer {
        StringAnswer::new(reference, mode, Options::new()).unwrap()
    }

    fn check(answer: &StringAnswer, candidate: &str) -> bool {
        answer.matches_with(&Value::from(candidate), &Options::new()).unwrap()
    }

    #[test]
    fn test_ignorecase() {
        let a = answer("  Moscow ", StringMode::IgnoreCase);
        assert_eq!(a.reference(), "Moscow");
        assert!(check(&a, "moscow"));
        assert!(check(&a, "MOSCOW\n"));
        assert!(!check(&a, "Moskva"));
    }

    #[test]
    fn test_exact() {
        let a = answer("Moscow", StringMode::Exact);
        assert!(check(&a, " Moscow "));
        assert!(!check(&a, "moscow"));
    }

    #[test]
    fn test_pattern() {
        let a = answer("test*", StringMode::Pattern);
        assert!(check(&a, "teSt..** adfkjaldkfja"));
        assert!(check(&a, "testl"));
        assert!(!check(&a, "adfaf testadfadf"));
        assert!(!check(&a, "test"));
    }

    #[test]
    fn test_pattern_case_option() {
        let stored = StringAnswer::new("test*", StringMode::Pattern, Options::new().ignore_case(false)).unwrap();
        assert!(!check(&stored, "TESTING"));
        assert!(check(&stored, "testing"));

        let relaxed = Options::new().ignore_case(true);
        assert!(stored.matches_with(&Value::from("TESTING"), &relaxed).unwrap());
        assert!(!check(&stored.with_options(&Options::new()), "TESTING"));
        assert!(check(&stored.with_options(&relaxed), "TESTING"));
    }

    #[test]
    fn test_regex() {
        let a = answer("t[e|a]st", StringMode::Regex);
        assert!(check(&a, "TEST"));
        assert!(check(&a, "tasty"));
        assert!(!check(&a, "a test"));

        let anchored = answer("^t[e|a]st$", StringMode::Regex);
        assert!(check(&anchored, "tast"));
        assert!(!check(&anchored, "tfst"));
    }

    #[test]
    fn test_invalid_regex_fails_at_construction() {
        let err = StringAnswer::new("t[e", StringMode::Regex, Options::new()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPattern(_)));
    }

    #[test]
    fn test_candidate_must_be_text() {
        let a = answer("x", StringMode::Exact);
        assert!(matches!(
            a.matches_with(&Value::from(vec!["x"]), &Options::new()),
            Err(MatchError::TypeMismatch { expected: "string", got: "array" })
        ));
    }
}
