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

//! CLI command implementations

mod completion;
mod info;
mod read;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use info::info;
pub use read::{read, render_json, render_text};

use crate::error::CliError;
use matread_core::{parse_with_options, read_file, Limits, ParseOptions, ParsedMatrix};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Environment variable overriding the maximum input file size in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "MATREAD_MAX_FILE_SIZE";

/// Get the maximum file size from the environment or use the default limit.
///
/// Invalid values fall back to the default.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| Limits::default().max_file_size)
}

/// Build parse options for a CLI invocation.
pub fn parse_options(columns: Option<usize>) -> ParseOptions {
    let builder = ParseOptions::builder().max_file_size(get_max_file_size());
    match columns {
        Some(n) => builder.fixed_columns(n).build(),
        None => builder.build(),
    }
}

/// Read and parse a matrix file.
///
/// The file size is checked against `MATREAD_MAX_FILE_SIZE` (default 1 GB)
/// before anything is read.
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened or fully read, is too large,
/// or contains a malformed token.
pub fn load_matrix(path: &str, columns: Option<usize>) -> Result<ParsedMatrix, CliError> {
    let options = parse_options(columns);
    let input = read_file(path, &options.limits)?;
    let parsed = parse_with_options(&input, &options)?;
    debug!(path, rows = parsed.rows(), columns = parsed.columns(), "loaded matrix");
    Ok(parsed)
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if file creation or writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
