use crate::answer::Answer;
use crate::error::{BuildError, MatchError};
use crate::mode::ListMode;
use crate::options::Options;
use crate::registry::{Element, Registry};
use crate::value::Value;

/// An ordered list of answers matched against a candidate array.
///
/// Elements keep their own stored options; per-call overrides given to the
/// list only affect the list itself (`minimum`).
#[derive(Debug, Clone)]
pub struct ListAnswer {
    elements: Vec<Answer>,
    mode: ListMode,
    options: Options,
}

impl ListAnswer {
    pub fn new(elements: Vec<Answer>, mode: ListMode, options: Options) -> Self {
        Self {
            elements,
            mode,
            options,
        }
    }

    /// Builds a list from pre-built answers and compact descriptions.
    pub fn from_elements<I>(
        elements: I,
        mode: ListMode,
        options: Options,
        registry: &Registry,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let elements = elements
            .into_iter()
            .map(|element| Into::<Element>::into(element).build(registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(elements, mode, options))
    }

    pub fn elements(&self) -> &[Answer] {
        &self.elements
    }

    pub fn mode(&self) -> ListMode {
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
        let items = candidate.as_array()?;
        let minimum = overrides
            .minimum
            .or(self.options.minimum)
            .unwrap_or(items.len());

        match self.mode {
            ListMode::Exact => {
                if items.len() != self.elements.len() {
                    return Ok(false);
                }
                for (index, (element, item)) in self.elements.iter().zip(items).enumerate() {
                    if !element.matches(item)? {
                        tracing::trace!(index, %item, "positional element did not match");
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            // Several items may be satisfied by the same element.
            ListMode::ExactUnordered => {
                if items.len() != self.elements.len() {
                    return Ok(false);
                }
                for item in items {
                    if self.position(item)?.is_none() {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            ListMode::Include => {
                let mut matched = 0;
                for item in items {
                    if self.position(item)?.is_none() {
                        return Ok(false);
                    }
                    matched += 1;
                }
                Ok(matched >= minimum)
            }
            ListMode::Exclude => {
                let mut avoided = 0;
                for item in items {
                    if let Some(index) = self.position(item)? {
                        tracing::trace!(index, %item, "excluded element matched");
                        return Ok(false);
                    }
                    avoided += 1;
                }
                Ok(avoided >= minimum)
            }
        }
    }

    /// Index of the first element that accepts `item`.
    fn position(&self, item: &Value) -> Result<Option<usize>, MatchError> {
        for (index, element) in self.elements.iter().enumerate() {
            if element.matches(item)? {
                tracing::trace!(index, %item, "element matched");
                return Ok(Some(index));
            }
        }
        tracing::trace!(%item, "no element matched");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::StringMode;

    fn capitals(mode: ListMode) -> ListAnswer {
        let elements = ["moscow", "paris", "ottawa"]
            .into_iter()
            .map(|city| Answer::string(city, StringMode::IgnoreCase).unwrap())
            .collect();
        ListAnswer::new(elements, mode, Options::new())
    }

    fn check(answer: &ListAnswer, candidate: Vec<&str>) -> bool {
        answer.matches_with(&Value::from(candidate), &Options::new()).unwrap()
    }

    #[test]
    fn test_exact_is_positional() {
        let list = capitals(ListMode::Exact);
        assert!(check(&list, vec!["Moscow", "Paris", "Ottawa"]));
        assert!(!check(&list, vec!["paris", "moscow", "ottawa"]));
        assert!(!check(&list, vec!["moscow", "paris"]));
    }

    #[test]
    fn test_exact_unordered() {
        let list = capitals(ListMode::ExactUnordered);
        assert!(check(&list, vec!["ottawa", "moscow", "paris"]));
        assert!(!check(&list, vec!["ottawa", "moscow"]));
        assert!(!check(&list, vec!["ottawa", "moscow", "rome"]));
    }

    #[test]
    fn test_exact_unordered_allows_reuse() {
        let list = capitals(ListMode::ExactUnordered);
        assert!(check(&list, vec!["paris", "paris", "paris"]));
    }

    #[test]
    fn test_include_defaults_to_all_items() {
        let list = capitals(ListMode::Include);
        assert!(check(&list, vec!["paris"]));
        assert!(check(&list, vec![]));
        assert!(!check(&list, vec!["paris", "beijing"]));
    }

    #[test]
    fn test_include_minimum() {
        let list = capitals(ListMode::Include).with_options(&Options::new().minimum(2));
        assert!(!check(&list, vec!["paris"]));
        assert!(check(&list, vec!["paris", "moscow"]));

        let relaxed = Options::new().minimum(1);
        assert!(list.matches_with(&Value::from(vec!["paris"]), &relaxed).unwrap());
    }

    #[test]
    fn test_exclude() {
        let list = capitals(ListMode::Exclude);
        assert!(check(&list, vec!["rome", "berlin"]));
        assert!(!check(&list, vec!["rome", "paris"]));

        let list = list.with_options(&Options::new().minimum(3));
        assert!(!check(&list, vec!["rome", "berlin"]));
        assert!(check(&list, vec!["rome", "berlin", "madrid"]));
    }

    #[test]
    fn test_candidate_must_be_array() {
        let list = capitals(ListMode::Exact);
        assert!(matches!(
            list.matches_with(&Value::from("paris"), &Options::new()),
            Err(MatchError::TypeMismatch { expected: "array", got: "string" })
        ));
    }

    #[test]
    fn test_child_errors_propagate() {
        let list = capitals(ListMode::Include);
        let candidate = Value::Array(vec![Value::Number(1.0)]);
        assert!(matches!(
            list.matches_with(&candidate, &Options::new()),
            Err(MatchError::TypeMismatch { expected: "string", got: "number" })
        ));
    }
}
