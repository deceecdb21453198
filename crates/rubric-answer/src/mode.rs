//! Match modes and how their names resolve.

use crate::error::BuildError;
use crate::registry::VariantTag;
use std::fmt;

/// A closed set of match strategies belonging to one answer variant.
pub trait MatchMode: Copy + Default + fmt::Display + Sized {
    const VARIANT: VariantTag;

    fn from_name(name: &str) -> Option<Self>;
}

/// What an unrecognised match-mode name does at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Fall back to the variant's default mode.
    #[default]
    Permissive,
    /// Fail with [`BuildError::UnknownMatchMode`].
    Strict,
}

impl Resolution {
    pub fn resolve<M: MatchMode>(self, name: &str) -> Result<M, BuildError> {
        if name == "default" {
            return Ok(M::default());
        }
        match (M::from_name(name), self) {
            (Some(mode), _) => Ok(mode),
            (None, Resolution::Strict) => Err(BuildError::UnknownMatchMode {
                variant: M::VARIANT,
                mode: name.to_string(),
            }),
            (None, Resolution::Permissive) => {
                let fallback = M::default();
                tracing::debug!(
                    variant = %M::VARIANT,
                    mode = name,
                    %fallback,
                    "unknown match mode, using default"
                );
                Ok(fallback)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    #[default]
    Roundoff,
    /// Significant-figure matching. Accepted at construction, unsupported
    /// when matching.
    Sigfig,
}

impl NumberMode {
    pub fn name(self) -> &'static str {
        match self {
            NumberMode::Roundoff => "roundoff",
            NumberMode::Sigfig => "sigfig",
        }
    }
}

impl MatchMode for NumberMode {
    const VARIANT: VariantTag = VariantTag::Number;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "roundoff" => Some(NumberMode::Roundoff),
            "sigfig" => Some(NumberMode::Sigfig),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringMode {
    #[default]
    IgnoreCase,
    Exact,
    /// Wildcard pattern: `*` is one or more characters, `\*` a literal star.
    Pattern,
    /// The reference is a regex, anchored at the start of the candidate.
    Regex,
}

impl StringMode {
    pub fn name(self) -> &'static str {
        match self {
            StringMode::IgnoreCase => "ignorecase",
            StringMode::Exact => "exact",
            StringMode::Pattern => "pattern",
            StringMode::Regex => "regex",
        }
    }
}

impl MatchMode for StringMode {
    const VARIANT: VariantTag = VariantTag::String;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "ignorecase" => Some(StringMode::IgnoreCase),
            "exact" => Some(StringMode::Exact),
            "pattern" => Some(StringMode::Pattern),
            "regex" => Some(StringMode::Regex),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceMode {
    #[default]
    Exact,
    ExactMultiple,
    Include,
    Exclude,
}

impl ChoiceMode {
    pub fn name(self) -> &'static str {
        match self {
            ChoiceMode::Exact => "exact",
            ChoiceMode::ExactMultiple => "exact_multiple",
            ChoiceMode::Include => "include",
            ChoiceMode::Exclude => "exclude",
        }
    }
}

impl MatchMode for ChoiceMode {
    const VARIANT: VariantTag = VariantTag::MultipleChoice;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact" => Some(ChoiceMode::Exact),
            "exact_multiple" | "multiple_exact" => Some(ChoiceMode::ExactMultiple),
            "include" => Some(ChoiceMode::Include),
            "exclude" => Some(ChoiceMode::Exclude),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Exact,
    ExactUnordered,
    Include,
    Exclude,
}

impl ListMode {
    pub fn name(self) -> &'static str {
        match self {
            ListMode::Exact => "exact",
            ListMode::ExactUnordered => "exact_unordered",
            ListMode::Include => "include",
            ListMode::Exclude => "exclude",
        }
    }
}

impl MatchMode for ListMode {
    const VARIANT: VariantTag = VariantTag::ListOfAnswers;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact" => Some(ListMode::Exact),
            "exact_unordered" => Some(ListMode::ExactUnordered),
            "include" => Some(ListMode::Include),
            "exclude" => Some(ListMode::Exclude),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    #[default]
    Exact,
}

impl MapMode {
    pub fn name(self) -> &'static str {
        match self {
            MapMode::Exact => "exact",
        }
    }
}

impl MatchMode for MapMode {
    const VARIANT: VariantTag = VariantTag::MapOfAnswers;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact" => Some(MapMode::Exact),
            _ => None,
        }
    }
}

impl fmt::Display for NumberMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ChoiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
