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

//! Two-phase tokenizing parser.
//!
//! Parsing runs in two explicit passes over the same buffer:
//!
//! 1. [`measure`] counts non-blank rows and, unless a fixed column count is
//!    given, the longest row's token count.
//! 2. [`fill`] allocates the dense buffers once and converts every token in
//!    place, so large inputs never trigger incremental reallocation.
//!
//! Rows shorter than the column count are zero-padded; tokens beyond the
//! column count are discarded unconverted. Both rules apply whether the
//! column count was fixed by the caller or inferred.
//!
//! # Examples
//!
//! ```
//! use matread_core::parse;
//!
//! let parsed = parse(b"1 2 3\n4 5\n", None).unwrap();
//! assert_eq!((parsed.rows(), parsed.columns()), (2, 3));
//! assert_eq!(parsed.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 0.0]);
//!
//! let fixed = parse(b"1 2 3\n4 5\n", Some(2)).unwrap();
//! assert_eq!(fixed.values(), &[1.0, 2.0, 4.0, 5.0]);
//! ```

use crate::error::{ParseError, ParseResult};
use crate::matrix::{try_filled, Dimensions, ParsedMatrix};
use crate::options::ParseOptions;
use crate::scan::rows;
use tracing::debug;

/// The NaN literal, matched ASCII case-insensitively.
pub const NAN_LITERAL: &[u8] = b"nan";

/// A converted token.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Value(f64),
    Nan,
}

/// Convert one token, or `None` if it is not a number.
#[inline]
fn convert_token(token: &[u8]) -> Option<Cell> {
    if token.eq_ignore_ascii_case(NAN_LITERAL) {
        return Some(Cell::Nan);
    }
    let text = std::str::from_utf8(token).ok()?;
    let value: f64 = text.parse().ok()?;
    // Signed spellings such as "-nan" reach here as a generic NaN.
    if value.is_nan() {
        Some(Cell::Nan)
    } else {
        Some(Cell::Value(value))
    }
}

/// Sizing phase: resolve the matrix dimensions of `input`.
///
/// With a fixed column count (`Some(c)`, `c > 0`) only rows are counted.
/// Otherwise the column count is the maximum token count of any row. Input
/// with no non-blank rows measures `0x0` either way.
pub fn measure(input: &[u8], fixed_columns: Option<usize>) -> Dimensions {
    let dims = match fixed_columns.filter(|&c| c > 0) {
        Some(columns) => Dimensions::new(rows(input).count(), columns),
        None => {
            let (count, widest) = rows(input).fold((0, 0), |(count, widest), row| {
                (count + 1, widest.max(row.token_count()))
            });
            Dimensions::new(count, widest)
        }
    };
    if dims.rows == 0 {
        Dimensions::default()
    } else {
        dims
    }
}

/// Fill phase: allocate the dense buffers for `dims` and populate them.
///
/// # Errors
///
/// - [`ParseError::OutOfMemory`] if either buffer cannot be allocated
/// - [`ParseError::MalformedToken`] on the first token within the column
///   count that is neither a number nor the NaN literal
pub fn fill(input: &[u8], dims: Dimensions) -> ParseResult<ParsedMatrix> {
    let cells = dims.checked_cells().ok_or(ParseError::OutOfMemory {
        requested: usize::MAX,
    })?;
    let mut values = try_filled(cells, 0.0_f64)?;
    let mut is_nan = try_filled(cells, false)?;

    for (y, row) in rows(input).take(dims.rows).enumerate() {
        let base = y * dims.columns;
        for (x, token) in row.tokens().take(dims.columns).enumerate() {
            match convert_token(token) {
                Some(Cell::Value(value)) => values[base + x] = value,
                Some(Cell::Nan) => is_nan[base + x] = true,
                None => return Err(ParseError::malformed_token(row.line, x + 1, token)),
            }
        }
    }

    Ok(ParsedMatrix {
        dims,
        values,
        is_nan,
    })
}

/// Parse `input` with default limits.
///
/// `fixed_columns` of `None` or `Some(0)` infers the column count.
pub fn parse(input: &[u8], fixed_columns: Option<usize>) -> ParseResult<ParsedMatrix> {
    let options = ParseOptions {
        fixed_columns,
        ..ParseOptions::default()
    };
    parse_with_options(input, &options)
}

/// Parse `input` with explicit options, enforcing `options.limits`.
///
/// # Errors
///
/// Returns [`ParseError::CellLimit`] before allocating if the measured
/// matrix exceeds `limits.max_cells`, plus any error from [`fill`].
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> ParseResult<ParsedMatrix> {
    let dims = measure(input, options.fixed_columns());
    debug!(
        rows = dims.rows,
        columns = dims.columns,
        fixed = options.fixed_columns().is_some(),
        "measured matrix"
    );

    let max = options.limits.max_cells;
    match dims.checked_cells() {
        Some(cells) if cells <= max => {}
        _ => {
            return Err(ParseError::CellLimit {
                rows: dims.rows,
                columns: dims.columns,
                max,
            })
        }
    }

    fill(input, dims)
}
