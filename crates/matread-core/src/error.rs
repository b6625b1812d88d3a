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

//! Error types for matrix reading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Longest token preview kept in a [`ParseError::MalformedToken`].
const MAX_TOKEN_PREVIEW: usize = 32;

/// The category of failure, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument count or shape.
    Usage,
    /// File missing, unreadable or truncated.
    Io,
    /// Allocation failure or refusal at any stage.
    OutOfMemory,
    /// A token that is neither numeric nor the NaN literal.
    MalformedToken,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "UsageError"),
            Self::Io => write!(f, "IOError"),
            Self::OutOfMemory => write!(f, "OutOfMemoryError"),
            Self::MalformedToken => write!(f, "MalformedTokenError"),
        }
    }
}

/// An error raised while acquiring, parsing or materializing a matrix.
///
/// Every error is fatal to the current call: no partial matrix is ever
/// returned alongside one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid arguments supplied by the caller.
    #[error("invalid usage: {0}")]
    Usage(String),

    /// The file could not be opened.
    #[error("can't open file '{}': {message}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// The file was opened but reading it failed.
    #[error("can't read the file '{}': {message}", .path.display())]
    ReadFailed {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// Fewer bytes were read than the file declared.
    #[error("can't read the file: expected {expected} bytes, read {actual}")]
    IoTruncated {
        /// Declared file size in bytes.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// The file is larger than the configured maximum.
    #[error("can't allocate enough memory: file '{}' is {size} bytes, limit is {max}", .path.display())]
    FileTooLarge {
        /// The file that was rejected.
        path: PathBuf,
        /// Declared file size in bytes.
        size: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// An allocation could not be satisfied.
    #[error("can't allocate enough memory ({requested} bytes requested)")]
    OutOfMemory {
        /// Size of the failed allocation in bytes.
        requested: usize,
    },

    /// The matrix would exceed the configured cell budget.
    #[error("can't allocate enough memory: {rows}x{columns} matrix exceeds the limit of {max} cells")]
    CellLimit {
        /// Rows of the rejected matrix.
        rows: usize,
        /// Columns of the rejected matrix.
        columns: usize,
        /// Configured maximum cell count.
        max: usize,
    },

    /// A token could not be converted to a number.
    #[error("can't parse file: line {line}, column {column}: malformed token '{token}'")]
    MalformedToken {
        /// Line number (1-based).
        line: usize,
        /// Token index within the line (1-based).
        column: usize,
        /// Lossy, truncated preview of the token.
        token: String,
    },
}

impl ParseError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a read error for a file that opened successfully.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a malformed-token error from the raw token bytes.
    pub fn malformed_token(line: usize, column: usize, token: &[u8]) -> Self {
        let preview = String::from_utf8_lossy(token);
        let token = if preview.chars().count() > MAX_TOKEN_PREVIEW {
            let cut: String = preview.chars().take(MAX_TOKEN_PREVIEW).collect();
            format!("{}...", cut)
        } else {
            preview.into_owned()
        };
        Self::MalformedToken {
            line,
            column,
            token,
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Io { .. } | Self::ReadFailed { .. } | Self::IoTruncated { .. } => ErrorKind::Io,
            Self::FileTooLarge { .. } | Self::OutOfMemory { .. } | Self::CellLimit { .. } => {
                ErrorKind::OutOfMemory
            }
            Self::MalformedToken { .. } => ErrorKind::MalformedToken,
        }
    }
}

/// Result type for matread operations.
pub type ParseResult<T> = Result<T, ParseError>;
