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

//! Matrix accessors.

use crate::error::{clear_error, set_error};
use crate::memory::is_valid_matrix_ptr;
use crate::types::{layout_code, MatreadMatrix, MATREAD_ERR_NULL_PTR, MATREAD_OK};
use crate::utils::usage_error;
use matread_core::{is_nan_sentinel, NAN_SENTINEL_BITS};
use std::os::raw::c_int;
use std::ptr;

/// Get the number of rows.
///
/// # Safety
/// Matrix pointer must be valid. Returns -1 if it is NULL or poisoned.
#[no_mangle]
pub unsafe extern "C" fn matread_matrix_rows(matrix: *const MatreadMatrix) -> i64 {
    if !is_valid_matrix_ptr(matrix) {
        return -1;
    }
    (*matrix).inner.rows() as i64
}

/// Get the number of columns.
///
/// # Safety
/// Matrix pointer must be valid. Returns -1 if it is NULL or poisoned.
#[no_mangle]
pub unsafe extern "C" fn matread_matrix_columns(matrix: *const MatreadMatrix) -> i64 {
    if !is_valid_matrix_ptr(matrix) {
        return -1;
    }
    (*matrix).inner.columns() as i64
}

/// Get the layout code of the matrix data.
///
/// # Safety
/// Matrix pointer must be valid. Returns -1 if it is NULL or poisoned.
#[no_mangle]
pub unsafe extern "C" fn matread_matrix_layout(matrix: *const MatreadMatrix) -> c_int {
    if !is_valid_matrix_ptr(matrix) {
        return -1;
    }
    layout_code((*matrix).inner.layout())
}

/// Borrow the matrix data (`rows * columns` doubles in the matrix layout).
///
/// The pointer stays valid until the matrix is freed. It must not be
/// dereferenced when the matrix is empty.
///
/// # Safety
/// Matrix pointer must be valid. Returns NULL if it is NULL or poisoned.
#[no_mangle]
pub unsafe extern "C" fn matread_matrix_data(matrix: *const MatreadMatrix) -> *const f64 {
    if !is_valid_matrix_ptr(matrix) {
        return ptr::null();
    }
    (*matrix).inner.as_slice().as_ptr()
}

/// Copy the matrix data into a caller-owned buffer.
///
/// # Arguments
/// * `matrix` - Matrix handle
/// * `dest` - Destination buffer
/// * `len` - Length of `dest` in doubles; must equal `rows * columns`
///
/// # Returns
/// MATREAD_OK on success, MATREAD_ERR_USAGE on a length mismatch.
///
/// # Safety
/// `dest` must be valid for `len` writes and must not overlap the matrix.
#[no_mangle]
pub unsafe extern "C" fn matread_matrix_copy_to(
    matrix: *const MatreadMatrix,
    dest: *mut f64,
    len: usize,
) -> c_int {
    clear_error();

    if !is_valid_matrix_ptr(matrix) {
        set_error("Null pointer argument");
        return MATREAD_ERR_NULL_PTR;
    }

    let data = (*matrix).inner.as_slice();
    if len != data.len() {
        return usage_error(&format!(
            "destination holds {} values, matrix has {}",
            len,
            data.len()
        ));
    }
    if data.is_empty() {
        return MATREAD_OK;
    }
    if dest.is_null() {
        set_error("Null pointer argument");
        return MATREAD_ERR_NULL_PTR;
    }

    ptr::copy_nonoverlapping(data.as_ptr(), dest, len);
    MATREAD_OK
}

/// Raw bit pattern stored in NaN cells (`0xFFF6AC007FFEAD00`).
#[no_mangle]
pub extern "C" fn matread_nan_sentinel_bits() -> u64 {
    NAN_SENTINEL_BITS
}

/// Returns 1 if `value` carries the NaN sentinel bit pattern, 0 otherwise.
#[no_mangle]
pub extern "C" fn matread_is_nan_sentinel(value: f64) -> c_int {
    c_int::from(is_nan_sentinel(value))
}
