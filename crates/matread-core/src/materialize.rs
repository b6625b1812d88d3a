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

//! Matrix materialization with bit-exact NaN sentinels.
//!
//! This is the only module that treats floating-point values as raw bits.
//! NaN cells are written as [`NAN_SENTINEL_BITS`] through `f64::from_bits`,
//! a pure reinterpretation that never passes through arithmetic, so the
//! payload reaches the destination unchanged.
//!
//! # Examples
//!
//! ```
//! use matread_core::{materialize, parse, Layout, NAN_SENTINEL_BITS};
//!
//! let parsed = parse(b"1 nan\n3 4\n", None).unwrap();
//! let matrix = materialize(&parsed, Layout::ColumnMajor).unwrap();
//!
//! assert_eq!(matrix.as_slice()[0], 1.0);
//! assert_eq!(matrix.as_slice()[1], 3.0);
//! assert_eq!(matrix.raw_bits(0, 1), Some(NAN_SENTINEL_BITS));
//! ```

use crate::error::{ParseError, ParseResult};
use crate::matrix::{try_filled, Layout, Matrix, ParsedMatrix};
use tracing::debug;

/// Bit pattern written into every NaN cell.
///
/// A negative NaN with payload `0x6AC007FFEAD00` and the quiet bit clear,
/// recognisable by exact bit comparison in downstream tools. Arithmetic on
/// it may set the quiet bit, so it is only ever copied.
pub const NAN_SENTINEL_BITS: u64 = 0xFFF6_AC00_7FFE_AD00;

/// The NaN sentinel as a float.
#[inline]
pub fn nan_sentinel() -> f64 {
    f64::from_bits(NAN_SENTINEL_BITS)
}

/// Returns `true` if `value` carries exactly the sentinel bit pattern.
#[inline]
pub fn is_nan_sentinel(value: f64) -> bool {
    value.to_bits() == NAN_SENTINEL_BITS
}

/// Copy `parsed` into a newly allocated matrix with the given layout.
///
/// # Errors
///
/// Returns [`ParseError::OutOfMemory`] if the destination cannot be allocated.
pub fn materialize(parsed: &ParsedMatrix, layout: Layout) -> ParseResult<Matrix> {
    let mut data = try_filled(parsed.values.len(), 0.0_f64)?;
    write_cells(parsed, layout, &mut data);
    debug!(
        rows = parsed.rows(),
        columns = parsed.columns(),
        ?layout,
        nan_cells = parsed.nan_count(),
        "materialized matrix"
    );
    Ok(Matrix {
        dims: parsed.dims,
        layout,
        data,
    })
}

/// Copy `parsed` into a caller-owned buffer of exactly `rows * columns` cells.
///
/// # Errors
///
/// Returns [`ParseError::Usage`] if `dest` has the wrong length.
pub fn materialize_into(parsed: &ParsedMatrix, layout: Layout, dest: &mut [f64]) -> ParseResult<()> {
    if dest.len() != parsed.values.len() {
        return Err(ParseError::usage(format!(
            "destination holds {} cells, matrix has {}",
            dest.len(),
            parsed.values.len()
        )));
    }
    write_cells(parsed, layout, dest);
    Ok(())
}

/// Relayout row-major source cells into `dest`, substituting the sentinel.
fn write_cells(parsed: &ParsedMatrix, layout: Layout, dest: &mut [f64]) {
    let dims = parsed.dims;
    let sentinel = nan_sentinel();
    match layout {
        Layout::RowMajor => {
            for ((slot, &value), &nan) in dest.iter_mut().zip(&parsed.values).zip(&parsed.is_nan) {
                *slot = if nan { sentinel } else { value };
            }
        }
        Layout::ColumnMajor => {
            for y in 0..dims.rows {
                let base = y * dims.columns;
                for x in 0..dims.columns {
                    let i = base + x;
                    dest[x * dims.rows + y] = if parsed.is_nan[i] {
                        sentinel
                    } else {
                        parsed.values[i]
                    };
                }
            }
        }
    }
}
