//! Building answers from compact descriptions.
//!
//! A compact description is an array `[tag, reference, mode?, options?]`:
//!
//! ```json
//! ["ListOfAnswers", [["String", "moscow"], ["Number", "11/10", "roundoff", {"digits": 2}]], "include"]
//! ```
//!
//! `mode` defaults to `"default"` and `options` to `{}`. List references are
//! arrays of compact descriptions and map references are objects of them.

use crate::answer::Answer;
use crate::choice::ChoiceAnswer;
use crate::error::BuildError;
use crate::list::ListAnswer;
use crate::map::MapAnswer;
use crate::mode::Resolution;
use crate::number::{NumberAnswer, NumberReference};
use crate::options::Options;
use crate::string::StringAnswer;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// The closed set of answer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    Number,
    String,
    MultipleChoice,
    ListOfAnswers,
    MapOfAnswers,
}

impl VariantTag {
    pub const ALL: [VariantTag; 5] = [
        VariantTag::Number,
        VariantTag::String,
        VariantTag::MultipleChoice,
        VariantTag::ListOfAnswers,
        VariantTag::MapOfAnswers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VariantTag::Number => "Number",
            VariantTag::String => "String",
            VariantTag::MultipleChoice => "MultipleChoice",
            VariantTag::ListOfAnswers => "ListOfAnswers",
            VariantTag::MapOfAnswers => "MapOfAnswers",
        }
    }
}

impl FromStr for VariantTag {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| BuildError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A composite element: already built, or still in compact form.
#[derive(Debug, Clone)]
pub enum Element {
    Answer(Answer),
    Compact(Value),
}

impl Element {
    pub fn build(self, registry: &Registry) -> Result<Answer, BuildError> {
        match self {
            Element::Answer(answer) => Ok(answer),
            Element::Compact(compact) => registry.build_compact(&compact),
        }
    }
}

impl From<Answer> for Element {
    fn from(answer: Answer) -> Self {
        Element::Answer(answer)
    }
}

impl From<Value> for Element {
    fn from(compact: Value) -> Self {
        Element::Compact(compact)
    }
}

/// Constructs answers by variant tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry {
    resolution: Resolution,
}

impl Registry {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// A registry that rejects unknown match-mode names.
    pub fn strict() -> Self {
        Self::new(Resolution::Strict)
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn build(
        &self,
        tag: VariantTag,
        reference: &Value,
        mode: &str,
        options: Options,
    ) -> Result<Answer, BuildError> {
        let resolution = self.resolution;
        let answer: Answer = match tag {
            VariantTag::Number => {
                let reference = match reference {
                    Value::String(literal) => NumberReference::Exact(literal.clone()),
                    Value::Array(pair) => match pair.as_slice() {
                        [Value::String(low), Value::String(high)] => {
                            NumberReference::Range(low.clone(), high.clone())
                        }
                        _ => return Err(invalid_reference(tag, "two-element array of strings", reference)),
                    },
                    _ => return Err(invalid_reference(tag, "string or [low, high]", reference)),
                };
                NumberAnswer::new(reference, resolution.resolve(mode)?, options)?.into()
            }
            VariantTag::String => {
                let Value::String(text) = reference else {
                    return Err(invalid_reference(tag, "string", reference));
                };
                StringAnswer::new(text, resolution.resolve(mode)?, options)?.into()
            }
            VariantTag::MultipleChoice => {
                ChoiceAnswer::new(reference.clone(), resolution.resolve(mode)?, options)?.into()
            }
            VariantTag::ListOfAnswers => {
                let Value::Array(items) = reference else {
                    return Err(invalid_reference(tag, "array", reference));
                };
                let elements = items.iter().cloned().map(Element::Compact);
                ListAnswer::from_elements(elements, resolution.resolve(mode)?, options, self)?.into()
            }
            VariantTag::MapOfAnswers => {
                let Value::Object(entries) = reference else {
                    return Err(invalid_reference(tag, "object", reference));
                };
                let elements = entries
                    .iter()
                    .map(|(key, compact)| (key.clone(), Element::Compact(compact.clone())));
                MapAnswer::from_elements(elements, resolution.resolve(mode)?, options, self)?.into()
            }
        };
        Ok(answer)
    }

    /// Builds an answer from `[tag, reference, mode?, options?]`.
    pub fn build_compact(&self, compact: &Value) -> Result<Answer, BuildError> {
        let parts = match compact {
            Value::Array(parts) if (2..=4).contains(&parts.len()) => parts.as_slice(),
            other => {
                return Err(BuildError::MalformedCompact(format!(
                    "expected [tag, reference, mode?, options?], got {}",
                    other
                )))
            }
        };

        let tag: VariantTag = match &parts[0] {
            Value::String(tag) => tag.parse()?,
            other => {
                return Err(BuildError::MalformedCompact(format!(
                    "variant tag must be a string, got {}",
                    other
                )))
            }
        };
        let mode = match parts.get(2) {
            None | Some(Value::Null) => "default",
            Some(Value::String(mode)) => mode.as_str(),
            Some(other) => {
                return Err(BuildError::MalformedCompact(format!(
                    "match mode must be a string, got {}",
                    other
                )))
            }
        };
        let options = match parts.get(3) {
            Some(options) => Options::from_value(options)?,
            None => Options::default(),
        };

        self.build(tag, &parts[1], mode, options)
    }
}

fn invalid_reference(variant: VariantTag, expected: &'static str, got: &Value) -> BuildError {
    BuildError::InvalidReference {
        variant,
        expected,
        got: got.type_name(),
    }
}
