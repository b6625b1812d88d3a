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

//! Matrix containers: the dense parse buffer and the destination matrix.

use crate::error::{ParseError, ParseResult};
use std::fmt;

/// Allocate a buffer of `len` copies of `value`, reporting allocation failure
/// as [`ParseError::OutOfMemory`] instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> ParseResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ParseError::OutOfMemory {
            requested: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    buf.resize(len, value);
    Ok(buf)
}

/// Matrix dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of non-blank rows.
    pub rows: usize,
    /// Number of columns, fixed or inferred.
    pub columns: usize,
}

impl Dimensions {
    /// Create dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells, or `None` on overflow.
    #[inline]
    pub fn checked_cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Memory order of a destination matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Rows are contiguous: cell `(row, col)` lives at `row * columns + col`.
    RowMajor,
    /// Columns are contiguous: cell `(row, col)` lives at `col * rows + row`.
    #[default]
    ColumnMajor,
}

impl Layout {
    /// Linear index of cell `(row, col)` in a `dims`-shaped buffer.
    #[inline]
    pub fn index(self, dims: Dimensions, row: usize, col: usize) -> usize {
        match self {
            Layout::RowMajor => row * dims.columns + col,
            Layout::ColumnMajor => col * dims.rows + row,
        }
    }
}

/// Row-major output of the parser: values plus a parallel NaN mask.
///
/// Both buffers have length `rows * columns`. A cell flagged in `is_nan`
/// always holds `0.0` in `values`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMatrix {
    pub(crate) dims: Dimensions,
    pub(crate) values: Vec<f64>,
    pub(crate) is_nan: Vec<bool>,
}

impl ParsedMatrix {
    /// Matrix dimensions.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Number of rows (`sy`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns (`sx`).
    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    /// Returns `true` if the matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row-major values; NaN cells hold `0.0`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Row-major NaN mask.
    pub fn nan_mask(&self) -> &[bool] {
        &self.is_nan
    }

    /// Value of cell `(row, col)`, or `None` if out of bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.offset(row, col).map(|i| self.values[i])
    }

    /// Whether cell `(row, col)` held the NaN literal.
    pub fn is_nan(&self, row: usize, col: usize) -> Option<bool> {
        self.offset(row, col).map(|i| self.is_nan[i])
    }

    /// Number of NaN cells.
    pub fn nan_count(&self) -> usize {
        self.is_nan.iter().filter(|&&nan| nan).count()
    }

    /// Consume the matrix, returning `(dims, values, is_nan)`.
    pub fn into_parts(self) -> (Dimensions, Vec<f64>, Vec<bool>) {
        (self.dims, self.values, self.is_nan)
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dims.rows && col < self.dims.columns).then(|| row * self.dims.columns + col)
    }
}

/// A materialized matrix in its destination layout.
///
/// NaN cells carry the sentinel bit pattern; see
/// [`crate::materialize::NAN_SENTINEL_BITS`].
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    pub(crate) dims: Dimensions,
    pub(crate) layout: Layout,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Matrix dimensions.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    /// Memory layout of [`Matrix::as_slice`].
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns `true` if the matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw cell data in [`Matrix::layout`] order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix, returning its raw data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Value of cell `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.raw_bits(row, col).map(f64::from_bits)
    }

    /// Raw 64-bit pattern of cell `(row, col)`.
    pub fn raw_bits(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.dims.rows || col >= self.dims.columns {
            return None;
        }
        Some(self.data[self.layout.index(self.dims, row, col)].to_bits())
    }

    /// Iterate over rows, each yielded as a vector of cell values.
    pub fn row_vectors(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.dims.rows).map(move |row| {
            (0..self.dims.columns)
                .map(|col| self.data[self.layout.index(self.dims, row, col)])
                .collect()
        })
    }
}

impl PartialEq for Matrix {
    /// Bit-exact equality, so NaN sentinels compare equal to themselves.
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
            && self.layout == other.layout
            && self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}
