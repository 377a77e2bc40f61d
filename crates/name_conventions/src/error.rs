/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors raised while reading naming data.
///
/// Formatting itself never fails; these only come from strict convention
/// parsing and from deserializing records out of text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("unknown naming convention: {0:?}")]
    UnknownConvention(String),

    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

impl From<serde_json::Error> for NamingError {
    fn from(e: serde_json::Error) -> Self {
        NamingError::Parse {
            format: "JSON",
            message: e.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for NamingError {
    fn from(e: serde_yaml::Error) -> Self {
        NamingError::Parse {
            format: "YAML",
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NamingError>;
