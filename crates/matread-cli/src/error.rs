// Dweve Matread - Numeric Matrix Reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the matread CLI.
//!
//! All command implementations return `Result<(), CliError>`; `main` prints
//! the error and exits non-zero.

use matread_core::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for matread CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or parsing the matrix failed.
    #[error("{0}")]
    Read(#[from] ParseError),

    /// Writing output failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The output path, or `<stdout>`
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_passes_message_through() {
        let err: CliError = ParseError::malformed_token(2, 1, b"foo").into();
        assert_eq!(
            err.to_string(),
            "can't parse file: line 2, column 1: malformed token 'foo'"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("bad shell");
        assert_eq!(err.to_string(), "Invalid input: bad shell");
    }

    #[test]
    fn test_json_format_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(matches!(cli_err, CliError::JsonFormat { .. }));
    }
}
