use crate::answer::Answer;
use crate::error::{BuildError, MatchError};
use crate::mode::MapMode;
use crate::options::Options;
use crate::registry::{Element, Registry};
use crate::value::Value;
use std::collections::BTreeMap;

/// Answers keyed by name, matched against a candidate object.
#[derive(Debug, Clone)]
pub struct MapAnswer {
    elements: BTreeMap<String, Answer>,
    mode: MapMode,
    options: Options,
}

impl MapAnswer {
    pub fn new(elements: BTreeMap<String, Answer>, mode: MapMode, options: Options) -> Self {
        Self {
            elements,
            mode,
            options,
        }
    }

    pub fn from_elements<I, K, E>(
        elements: I,
        mode: MapMode,
        options: Options,
        registry: &Registry,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<Element>,
    {
        let elements = elements
            .into_iter()
            .map(|(key, element)| {
                let element: Element = element.into();
                Ok((key.into(), element.build(registry)?))
            })
            .collect::<Result<BTreeMap<String, Answer>, BuildError>>()?;
        Ok(Self::new(elements, mode, options))
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.elements.get(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn mode(&self) -> MapMode {
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
        let entries = candidate.as_object()?;
        match self.mode {
            MapMode::Exact => {
                if entries.len() != self.elements.len() {
                    return Ok(false);
                }
                for (key, value) in entries {
                    let Some(element) = self.elements.get(key) else {
                        tracing::trace!(%key, "unexpected key");
                        return Ok(false);
                    };
                    if !element.matches(value)? {
                        tracing::trace!(%key, %value, "entry did not match");
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}
