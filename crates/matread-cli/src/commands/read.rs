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

//! Read command - print a parsed matrix as text or JSON

use super::{load_matrix, write_output};
use crate::cli::OutputFormat;
use crate::error::CliError;
use matread_core::{materialize, Layout, Matrix};
use serde_json::{json, Value};
use std::fmt::Write as _;

/// Read a matrix file and write it in the requested format.
///
/// # Arguments
///
/// * `file` - Path to the numeric text file
/// * `columns` - Fixed column count, `None` or `Some(0)` to infer
/// * `layout` - Order of the flat JSON `data` array
/// * `format` - Text or JSON output
/// * `output` - Output path, stdout when `None`
///
/// # Errors
///
/// Returns `Err` if reading, parsing or writing fails.
pub fn read(
    file: &str,
    columns: Option<usize>,
    layout: Layout,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<(), CliError> {
    let parsed = load_matrix(file, columns)?;
    let matrix = materialize(&parsed, layout)?;

    let content = match format {
        OutputFormat::Text => render_text(&matrix),
        OutputFormat::Json => render_json(&matrix)?,
    };
    write_output(&content, output)
}

/// Render a matrix one row per line.
///
/// NaN cells are written as `NaN`, so the output reads back to the same
/// matrix.
pub fn render_text(matrix: &Matrix) -> String {
    let mut out = String::with_capacity(matrix.as_slice().len() * 4);
    for row in matrix.row_vectors() {
        for (x, value) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            if value.is_nan() {
                out.push_str("NaN");
            } else {
                let _ = write!(out, "{}", value);
            }
        }
        out.push('\n');
    }
    out
}

/// Render a matrix as a JSON object.
///
/// `data` holds every cell in the matrix's own layout. Non-finite values
/// (including NaN cells) become `null`.
///
/// # Errors
///
/// Returns `Err` if JSON serialization fails.
pub fn render_json(matrix: &Matrix) -> Result<String, CliError> {
    let data: Vec<Value> = matrix.as_slice().iter().map(|&v| Value::from(v)).collect();
    let doc = json!({
        "rows": matrix.rows(),
        "columns": matrix.columns(),
        "layout": layout_name(matrix.layout()),
        "data": data,
    });
    let mut out = serde_json::to_string(&doc)?;
    out.push('\n');
    Ok(out)
}

fn layout_name(layout: Layout) -> &'static str {
    match layout {
        Layout::ColumnMajor => "column-major",
        Layout::RowMajor => "row-major",
    }
}
