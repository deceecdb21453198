use crate::choice::ChoiceAnswer;
use crate::error::{BuildError, MatchError};
use crate::list::ListAnswer;
use crate::map::MapAnswer;
use crate::mode::{ChoiceMode, ListMode, MapMode, NumberMode, StringMode};
use crate::number::NumberAnswer;
use crate::options::Options;
use crate::registry::{Registry, VariantTag};
use crate::string::StringAnswer;
use crate::value::Value;
use std::collections::BTreeMap;

/// An answer specification of any variant.
#[derive(Debug, Clone)]
pub enum Answer {
    Number(NumberAnswer),
    String(StringAnswer),
    Choice(ChoiceAnswer),
    List(ListAnswer),
    Map(MapAnswer),
}

impl Answer {
    /// A number answer in the default `roundoff` mode.
    pub fn number(literal: &str) -> Result<Self, BuildError> {
        NumberAnswer::new(literal, NumberMode::default(), Options::new()).map(Answer::Number)
    }

    pub fn number_range(low: &str, high: &str) -> Result<Self, BuildError> {
        NumberAnswer::new((low, high), NumberMode::default(), Options::new()).map(Answer::Number)
    }

    pub fn string(reference: &str, mode: StringMode) -> Result<Self, BuildError> {
        StringAnswer::new(reference, mode, Options::new()).map(Answer::String)
    }

    pub fn choice(accepted: impl Into<Value>, mode: ChoiceMode) -> Result<Self, BuildError> {
        ChoiceAnswer::new(accepted, mode, Options::new()).map(Answer::Choice)
    }

    pub fn list(elements: Vec<Answer>, mode: ListMode) -> Self {
        Answer::List(ListAnswer::new(elements, mode, Options::new()))
    }

    pub fn map<K: Into<String>>(elements: impl IntoIterator<Item = (K, Answer)>) -> Self {
        let elements: BTreeMap<String, Answer> =
            elements.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Answer::Map(MapAnswer::new(elements, MapMode::Exact, Options::new()))
    }

    /// Builds an answer from a compact `[tag, reference, mode?, options?]`
    /// description with the permissive registry.
    pub fn from_compact(compact: &Value) -> Result<Self, BuildError> {
        Registry::default().build_compact(compact)
    }

    pub fn tag(&self) -> VariantTag {
        match self {
            Answer::Number(_) => VariantTag::Number,
            Answer::String(_) => VariantTag::String,
            Answer::Choice(_) => VariantTag::MultipleChoice,
            Answer::List(_) => VariantTag::ListOfAnswers,
            Answer::Map(_) => VariantTag::MapOfAnswers,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            Answer::Number(a) => a.mode().name(),
            Answer::String(a) => a.mode().name(),
            Answer::Choice(a) => a.mode().name(),
            Answer::List(a) => a.mode().name(),
            Answer::Map(a) => a.mode().name(),
        }
    }

    pub fn options(&self) -> &Options {
        match self {
            Answer::Number(a) => a.options(),
            Answer::String(a) => a.options(),
            Answer::Choice(a) => a.options(),
            Answer::List(a) => a.options(),
            Answer::Map(a) => a.options(),
        }
    }

    /// Returns a copy with `overrides` merged into the stored options.
    pub fn with_options(&self, overrides: &Options) -> Result<Self, BuildError> {
        Ok(match self {
            Answer::Number(a) => Answer::Number(a.with_options(overrides)?),
            Answer::String(a) => Answer::String(a.with_options(overrides)),
            Answer::Choice(a) => Answer::Choice(a.with_options(overrides)),
            Answer::List(a) => Answer::List(a.with_options(overrides)),
            Answer::Map(a) => Answer::Map(a.with_options(overrides)),
        })
    }

    pub fn matches(&self, candidate: &Value) -> Result<bool, MatchError> {
        self.matches_with(candidate, &Options::new())
    }

    /// Matches with per-call option overrides. The overrides are not stored.
    pub fn matches_with(&self, candidate: &Value, overrides: &Options) -> Result<bool, MatchError> {
        match self {
            Answer::Number(a) => a.matches_with(candidate, overrides),
            Answer::String(a) => a.matches_with(candidate, overrides),
            Answer::Choice(a) => a.matches_with(candidate, overrides),
            Answer::List(a) => a.matches_with(candidate, overrides),
            Answer::Map(a) => a.matches_with(candidate, overrides),
        }
    }
}

impl From<NumberAnswer> for Answer {
    fn from(a: NumberAnswer) -> Self {
        Answer::Number(a)
    }
}

impl From<StringAnswer> for Answer {
    fn from(a: StringAnswer) -> Self {
        Answer::String(a)
    }
}

impl From<ChoiceAnswer> for Answer {
    fn from(a: ChoiceAnswer) -> Self {
        Answer::Choice(a)
    }
}

impl From<ListAnswer> for Answer {
    fn from(a: ListAnswer) -> Self {
        Answer::List(a)
    }
}

impl From<MapAnswer> for Answer {
    fn from(a: MapAnswer) -> Self {
        Answer::Map(a)
    }
}
