//! Structured error types shared across CatApp crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CatError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (reaction keys, column names, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the CatApp engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CatError {
    /// A reaction descriptor did not split into three non-empty parts.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(ErrorInfo),
    /// An energy type selector outside the supported columns.
    #[error("invalid selector: {0}")]
    InvalidSelector(ErrorInfo),
    /// The record store was unreachable or rejected a statement.
    #[error("store error: {0}")]
    Store(ErrorInfo),
    /// A stored energy value could not be read as a finite number.
    #[error("malformed record: {0}")]
    MalformedRecord(ErrorInfo),
    /// Inconsistent input handed to the linear fit.
    #[error("fit error: {0}")]
    Fit(ErrorInfo),
    /// Configuration could not be loaded or is out of range.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CatError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CatError::InvalidDescriptor(info)
            | CatError::InvalidSelector(info)
            | CatError::Store(info)
            | CatError::MalformedRecord(info)
            | CatError::Fit(info)
            | CatError::Config(info)
            | CatError::Serde(info) => info,
        }
    }

    /// Wraps a store failure, keeping the driver message as the hint.
    pub fn store(code: &str, message: impl Into<String>, err: impl ToString) -> Self {
        CatError::Store(ErrorInfo::new(code, message).with_hint(err.to_string()))
    }
}
