//! JSON encodings handed to the presentation layer.

use serde::Serialize;

use crate::errors::{CatError, ErrorInfo};

fn serde_error(code: &str, err: impl ToString) -> CatError {
    CatError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Encodes a sequence as a compact JSON array string, e.g. `[-0.5,0.1]`.
pub fn to_json_array<T: Serialize>(values: &[T]) -> Result<String, CatError> {
    serde_json::to_string(values).map_err(|err| serde_error("json_array", err))
}

/// Serializes a value into pretty JSON for terminal output.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CatError> {
    serde_json::to_string_pretty(value).map_err(|err| serde_error("json_pretty", err))
}
