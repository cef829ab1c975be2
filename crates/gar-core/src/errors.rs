//! Errors raised while building group elements and their summit sets.
//!
//! Every error carries an [`ErrorInfo`]: a stable code such as
//! `strand-count` or `atom-out-of-range`, a message, and the offending
//! values (strand counts, word positions, factor tables) as context.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and offending values of a [`GarError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable code, e.g. `parameter-mismatch`.
    pub code: String,
    /// What went wrong.
    pub message: String,
    /// Offending values keyed by role (`strands`, `letter`, `position`, ...).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to build a valid input instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records an offending value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    /// `message (code: c) | context: [k=v, ...] | hint: h`, omitting empty parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self.context.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Failure of a Garside group computation.
///
/// Group computations themselves are total; errors only come from inputs:
/// unsupported or mismatched groups, malformed words and factor tables,
/// and undecodable JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GarError {
    /// Unsupported strand count, or elements of different groups combined.
    #[error("parameter error: {0}")]
    Parameter(ErrorInfo),
    /// A letter that names no atom, or a table that is not a permutation.
    #[error("word error: {0}")]
    Word(ErrorInfo),
    /// JSON that does not describe a braid or a report.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl GarError {
    /// The payload, whatever the family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GarError::Parameter(info) | GarError::Word(info) | GarError::Serde(info) => info,
        }
    }

    /// Shorthand for `self.info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
