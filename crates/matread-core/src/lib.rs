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

//! Core parser and materializer for whitespace-delimited numeric matrices.
//!
//! This crate turns a text file of numbers such as
//!
//! ```text
//! 1.5  2   3
//! 4   NaN
//! ```
//!
//! into a dense `f64` matrix. Rows are lines, columns are whitespace-separated
//! tokens, and the case-insensitive literal `NaN` marks missing cells.
//!
//! # Pipeline
//!
//! - [`scan`]: zero-copy line and token iteration
//! - [`parser`]: two-phase [`measure`] / [`fill`] parsing into a row-major
//!   [`ParsedMatrix`] with a parallel NaN mask
//! - [`materialize`](mod@materialize): relayout into a [`Matrix`] in
//!   row- or column-major order, writing NaN cells as the bit-exact
//!   [`NAN_SENTINEL_BITS`] pattern
//! - [`reader`]: whole-file acquisition and [`read_matrix`]
//!
//! # Examples
//!
//! ```
//! use matread_core::{materialize, parse, Layout, NAN_SENTINEL_BITS};
//!
//! let parsed = parse(b"1 2 3\n4 nan\n", None).unwrap();
//! assert_eq!((parsed.rows(), parsed.columns()), (2, 3));
//!
//! let matrix = materialize(&parsed, Layout::RowMajor).unwrap();
//! assert_eq!(matrix.get(1, 0), Some(4.0));
//! assert_eq!(matrix.raw_bits(1, 1), Some(NAN_SENTINEL_BITS));
//! assert_eq!(matrix.get(1, 2), Some(0.0));
//! ```
//!
//! # Ragged input
//!
//! Without a fixed column count the widest row sets the column count and
//! shorter rows are zero-padded. With a fixed count, rows are padded or
//! truncated to it. Blank lines are skipped.

mod error;
mod limits;
pub mod materialize;
mod matrix;
mod options;
pub mod parser;
pub mod reader;
pub mod scan;

pub use error::{ErrorKind, ParseError, ParseResult};
pub use limits::Limits;
pub use materialize::{
    is_nan_sentinel, materialize, materialize_into, nan_sentinel, NAN_SENTINEL_BITS,
};
pub use matrix::{Dimensions, Layout, Matrix, ParsedMatrix};
pub use options::{ParseOptions, ParseOptionsBuilder, ReadOptions};
pub use parser::{fill, measure, parse, parse_with_options, NAN_LITERAL};
pub use reader::{read_file, read_matrix, read_matrix_from_bytes, read_matrix_with_options};
