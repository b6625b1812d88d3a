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

//! Matread FFI Bindings
//!
//! C-compatible interface for reading numeric text files into dense
//! matrices. All functions use C-style error handling with return codes.
//!
//! # Memory Management
//!
//! - Matrices returned by `matread_read` / `matread_parse` MUST be freed with
//!   `matread_free_matrix`
//! - Pointers returned by `matread_matrix_data` are borrowed from the matrix
//!   and become invalid once it is freed
//! - `matread_measure` + `matread_parse_into` fill a caller-owned buffer
//!   without allocating a matrix handle
//!
//! Passing a pointer that was not returned by this library to
//! `matread_free_matrix` is undefined behavior. NULL is ignored.
//!
//! # Thread Safety
//!
//! Error messages live in thread-local storage: `matread_get_last_error`
//! returns the error of the calling thread only. Matrix handles are not
//! synchronized; do not share one between threads without a lock.
//!
//! # NaN Cells
//!
//! Cells written as `NaN` in the input hold the bit pattern returned by
//! `matread_nan_sentinel_bits` (`0xFFF6AC007FFEAD00`), not the platform's
//! canonical NaN.
//!
//! # Audit Logging
//!
//! Every reading call is logged through `tracing` under the
//! `matread_ffi::audit` target. Install a subscriber in the host process to
//! see the logs.

mod error;
mod matrix;
mod memory;
mod reading;
mod types;
mod utils;

pub mod audit;

pub use error::{matread_clear_error, matread_get_last_error};
pub use matrix::{
    matread_is_nan_sentinel, matread_matrix_columns, matread_matrix_copy_to, matread_matrix_data,
    matread_matrix_layout, matread_matrix_rows, matread_nan_sentinel_bits,
};
pub use memory::matread_free_matrix;
pub use reading::{matread_measure, matread_parse, matread_parse_into, matread_read};
pub use types::{
    MatreadMatrix, MATREAD_ERR_ALLOC, MATREAD_ERR_INVALID_UTF8, MATREAD_ERR_IO,
    MATREAD_ERR_NULL_PTR, MATREAD_ERR_PARSE, MATREAD_ERR_USAGE, MATREAD_LAYOUT_COLUMN_MAJOR,
    MATREAD_LAYOUT_ROW_MAJOR, MATREAD_OK,
};
