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

//! Info command - matrix dimensions and NaN statistics

use super::load_matrix;
use crate::error::CliError;
use colored::Colorize;

/// Print the dimensions, cell count and NaN count of a matrix file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn info(file: &str, columns: Option<usize>) -> Result<(), CliError> {
    let parsed = load_matrix(file, columns)?;
    let dims = parsed.dims();
    let cells = parsed.values().len();

    println!("{} {}", "✓".green().bold(), file);
    println!("  {} {}", "Dimensions:".bold(), dims.to_string().cyan());
    println!("  {}       {}", "Rows:".bold(), dims.rows);
    println!("  {}    {}", "Columns:".bold(), dims.columns);
    println!("  {}      {}", "Cells:".bold(), cells);

    let nan_count = parsed.nan_count();
    let nan_text = nan_count.to_string();
    if nan_count > 0 {
        println!("  {}  {}", "NaN cells:".bold(), nan_text.yellow());
    } else {
        println!("  {}  {}", "NaN cells:".bold(), nan_text);
    }

    Ok(())
}
