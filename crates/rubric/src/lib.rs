pub mod check;
pub mod cli;
pub mod error;
pub mod output;

pub use rubric_answer::{Answer, Options, Registry, Value};
