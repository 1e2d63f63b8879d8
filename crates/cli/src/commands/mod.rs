//! Command implementations.

pub mod check;
pub mod replay;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CliError::json(path, e))
}

/// Label used in errors for standard output.
pub(crate) const STDOUT: &str = "<stdout>";
