use rubric_answer::BuildError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read answer file '{path}'")]
    ReadAnswer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what} as JSON")]
    ParseJson {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build answer: {0}")]
    Build(#[from] BuildError),

    #[error("Invalid option '{0}': expected KEY=VALUE")]
    InvalidOverride(String),
}

pub type Result<T> = std::result::Result<T, Error>;
