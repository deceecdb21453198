use crate::error::{Error, Result};
use rubric_answer::{Answer, MatchError, Options, Registry, Value};
use std::path::PathBuf;

/// Where the compact answer description comes from.
#[derive(Debug, Clone)]
pub enum AnswerSource {
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched,
    NotMatched,
    Error(MatchError),
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched)
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub candidate: String,
    pub outcome: Outcome,
}

pub fn load_answer(source: &AnswerSource, registry: &Registry) -> Result<Answer> {
    let (text, what) = match source {
        AnswerSource::Inline(text) => (text.clone(), "answer".to_string()),
        AnswerSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| Error::ReadAnswer {
                path: path.clone(),
                source: e,
            })?;
            (text, format!("answer file '{}'", path.display()))
        }
    };
    let compact = parse_json(&text, what)?;
    let answer = registry.build_compact(&compact)?;
    tracing::debug!(variant = %answer.tag(), mode = answer.mode_name(), "built answer");
    Ok(answer)
}

/// Text candidates are taken verbatim; with `json` they are parsed.
pub fn parse_candidate(raw: &str, json: bool) -> Result<Value> {
    if json {
        parse_json(raw, format!("candidate '{}'", raw))
    } else {
        Ok(Value::from(raw))
    }
}

/// Reads `key=value` pairs into per-call options. Values are parsed as JSON
/// when they can be, otherwise taken as text.
pub fn parse_overrides(pairs: &[String]) -> Result<Options> {
    let mut entries = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| Error::InvalidOverride(pair.clone()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidOverride(pair.clone()));
        }
        let value = serde_json::from_str::<serde_json::Value>(raw)
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(raw));
        entries.push((key.to_string(), value));
    }
    let object: Value = entries.into_iter().collect();
    Ok(Options::from_value(&object)?)
}

pub fn run_checks(
    answer: &Answer,
    candidates: &[String],
    json: bool,
    overrides: &Options,
) -> Result<Vec<CheckResult>> {
    let mut results = Vec::with_capacity(candidates.len());
    for raw in candidates {
        let candidate = parse_candidate(raw, json)?;
        let outcome = match answer.matches_with(&candidate, overrides) {
            Ok(true) => Outcome::Matched,
            Ok(false) => Outcome::NotMatched,
            Err(e) => Outcome::Error(e),
        };
        tracing::debug!(candidate = %raw, ?outcome, "checked");
        results.push(CheckResult {
            candidate: raw.clone(),
            outcome,
        });
    }
    Ok(results)
}

fn parse_json(text: &str, what: String) -> Result<Value> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(Value::from)
        .map_err(|source| Error::ParseJson { what, source })
}
