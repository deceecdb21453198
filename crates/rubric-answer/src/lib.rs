//! Answer specifications and the strategies used to match candidates
//! against them.
//!
//! Five variants are supported:
//! - `Number`: exact value or range, compared after rounding
//! - `String`: case-insensitive, exact, wildcard pattern or regex
//! - `MultipleChoice`: one accepted value or a set of accepted tokens
//! - `ListOfAnswers`: a sequence of answers, positional or unordered
//! - `MapOfAnswers`: answers keyed by name
//!
//! Answers are built once, either directly or from a compact JSON-shaped
//! description, and then match any number of candidates. Options are never
//! mutated in place: [`Answer::with_options`] returns a new answer and
//! [`Answer::matches_with`] takes transient overrides.
//!
//! # Example
//!
//! ```
//! use rubric_answer::{Answer, ListMode, Options, StringMode, Value};
//!
//! let capitals = Answer::list(
//!     vec![
//!         Answer::string("moscow", StringMode::IgnoreCase).unwrap(),
//!         Answer::string("paris", StringMode::IgnoreCase).unwrap(),
//!         Answer::string("ottawa", StringMode::IgnoreCase).unwrap(),
//!     ],
//!     ListMode::Include,
//! );
//! assert!(capitals.matches(&Value::from(vec!["Paris"])).unwrap());
//! assert!(!capitals.matches(&Value::from(vec!["paris", "beijing"])).unwrap());
//!
//! let two = Options::new().minimum(2);
//! assert!(!capitals.matches_with(&Value::from(vec!["paris"]), &two).unwrap());
//! ```

mod answer;
mod choice;
mod error;
mod list;
mod map;
mod mode;
mod number;
mod options;
mod registry;
mod string;
mod value;

pub use answer::Answer;
pub use choice::ChoiceAnswer;
pub use error::{BuildError, MatchError};
pub use list::ListAnswer;
pub use map::MapAnswer;
pub use mode::{ChoiceMode, ListMode, MapMode, MatchMode, NumberMode, Resolution, StringMode};
pub use number::{NumberAnswer, NumberReference};
pub use options::Options;
pub use registry::{Element, Registry, VariantTag};
pub use rubric_numeric::{RangeMode, DEFAULT_DIGITS};
pub use string::StringAnswer;
pub use value::Value;
