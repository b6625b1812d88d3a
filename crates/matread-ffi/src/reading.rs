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

//! Matrix reading entry points.

use crate::audit::{
    audit_call_failure, audit_call_start, audit_call_success, sanitize_c_string, sanitize_pointer,
};
use crate::error::{clear_error, get_thread_local_error, set_error};
use crate::types::{MatreadMatrix, MATREAD_ERR_NULL_PTR, MATREAD_OK};
use crate::utils::{get_input_bytes, get_path, parse_options, read_options, report};
use matread_core::{
    materialize_into, measure, parse_with_options, read_matrix_from_bytes,
    read_matrix_with_options, Matrix,
};
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::slice;
use std::time::Instant;

/// Log the outcome of a call and turn it into a return code.
fn complete(function: &'static str, start: Instant, result: Result<(), c_int>) -> c_int {
    match result {
        Ok(()) => {
            audit_call_success(function, start.elapsed());
            MATREAD_OK
        }
        Err(code) => {
            audit_call_failure(function, code, &get_thread_local_error(), start.elapsed());
            code
        }
    }
}

/// Hand a finished result to the caller and log the outcome.
///
/// # Safety
/// `out_matrix` must be valid for writes.
unsafe fn finish(
    function: &'static str,
    start: Instant,
    result: Result<Matrix, c_int>,
    out_matrix: *mut *mut MatreadMatrix,
) -> c_int {
    let result = result.map(|inner| {
        *out_matrix = Box::into_raw(Box::new(MatreadMatrix { inner }));
    });
    if result.is_err() {
        *out_matrix = ptr::null_mut();
    }
    complete(function, start, result)
}

fn null_pointer(function: &'static str, start: Instant) -> c_int {
    set_error("Null pointer argument");
    audit_call_failure(
        function,
        MATREAD_ERR_NULL_PTR,
        "Null pointer argument",
        start.elapsed(),
    );
    MATREAD_ERR_NULL_PTR
}

/// Read a numeric text file into a matrix.
///
/// # Arguments
/// * `filename` - NUL-terminated UTF-8 path
/// * `fixed_columns` - Column count, or 0 to use the widest row
/// * `layout` - `MATREAD_LAYOUT_COLUMN_MAJOR` or `MATREAD_LAYOUT_ROW_MAJOR`
/// * `out_matrix` - Receives the matrix handle, or NULL on failure
///
/// # Returns
/// MATREAD_OK on success, error code on failure. On failure no matrix is
/// produced and `matread_get_last_error` describes the problem.
///
/// # Safety
/// `filename` must be a valid C string and `out_matrix` valid for writes.
/// Free the handle with `matread_free_matrix`.
#[no_mangle]
pub unsafe extern "C" fn matread_read(
    filename: *const c_char,
    fixed_columns: c_int,
    layout: c_int,
    out_matrix: *mut *mut MatreadMatrix,
) -> c_int {
    let start = Instant::now();

    audit_call_start(
        "matread_read",
        &[
            ("filename", &sanitize_c_string(filename, 64)),
            ("fixed_columns", &fixed_columns.to_string()),
            ("layout", &layout.to_string()),
            ("out_matrix", &sanitize_pointer(out_matrix)),
        ],
    );

    clear_error();

    if filename.is_null() || out_matrix.is_null() {
        return null_pointer("matread_read", start);
    }

    let result = read_options(fixed_columns, layout).and_then(|options| {
        let path = get_path(filename)?;
        read_matrix_with_options(path, &options).map_err(report)
    });

    finish("matread_read", start, result, out_matrix)
}

/// Parse an in-memory numeric text buffer into a matrix.
///
/// # Arguments
/// * `input` - Input bytes (need not be UTF-8)
/// * `input_len` - Length in bytes, or -1 for NUL-terminated
/// * `fixed_columns` - Column count, or 0 to use the widest row
/// * `layout` - `MATREAD_LAYOUT_COLUMN_MAJOR` or `MATREAD_LAYOUT_ROW_MAJOR`
/// * `out_matrix` - Receives the matrix handle, or NULL on failure
///
/// # Returns
/// MATREAD_OK on success, error code on failure.
///
/// # Safety
/// `input` must be valid for `input_len` bytes (or NUL-terminated when
/// `input_len` is -1) and `out_matrix` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn matread_parse(
    input: *const c_char,
    input_len: c_int,
    fixed_columns: c_int,
    layout: c_int,
    out_matrix: *mut *mut MatreadMatrix,
) -> c_int {
    let start = Instant::now();

    audit_call_start(
        "matread_parse",
        &[
            ("input_ptr", &sanitize_pointer(input)),
            ("input_len", &input_len.to_string()),
            ("fixed_columns", &fixed_columns.to_string()),
            ("layout", &layout.to_string()),
            ("out_matrix", &sanitize_pointer(out_matrix)),
        ],
    );

    clear_error();

    if input.is_null() || out_matrix.is_null() {
        return null_pointer("matread_parse", start);
    }

    let result = read_options(fixed_columns, layout).and_then(|options| {
        let bytes = get_input_bytes(input, input_len)?;
        read_matrix_from_bytes(bytes, &options).map_err(report)
    });

    finish("matread_parse", start, result, out_matrix)
}

/// Measure the dimensions an in-memory buffer would parse to.
///
/// Use this to size a host-allocated buffer for `matread_parse_into`. Tokens
/// are not converted, so a malformed token is only reported by the parse.
///
/// # Arguments
/// * `input` - Input bytes
/// * `input_len` - Length in bytes, or -1 for NUL-terminated
/// * `fixed_columns` - Column count, or 0 to use the widest row
/// * `out_rows` - Receives the row count
/// * `out_columns` - Receives the column count
///
/// # Safety
/// `input` must be valid for `input_len` bytes (or NUL-terminated when
/// `input_len` is -1); both out pointers must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn matread_measure(
    input: *const c_char,
    input_len: c_int,
    fixed_columns: c_int,
    out_rows: *mut i64,
    out_columns: *mut i64,
) -> c_int {
    let start = Instant::now();

    audit_call_start(
        "matread_measure",
        &[
            ("input_ptr", &sanitize_pointer(input)),
            ("input_len", &input_len.to_string()),
            ("fixed_columns", &fixed_columns.to_string()),
        ],
    );

    clear_error();

    if input.is_null() || out_rows.is_null() || out_columns.is_null() {
        return null_pointer("matread_measure", start);
    }

    let result = parse_options(fixed_columns).and_then(|options| {
        let bytes = get_input_bytes(input, input_len)?;
        let dims = measure(bytes, options.fixed_columns());
        *out_rows = dims.rows as i64;
        *out_columns = dims.columns as i64;
        Ok(())
    });

    complete("matread_measure", start, result)
}

/// Parse an in-memory buffer directly into a caller-owned matrix buffer.
///
/// No intermediate matrix is kept: cells are written straight into `dest`
/// in the requested layout, with NaN cells holding the sentinel bits.
///
/// # Arguments
/// * `input` - Input bytes
/// * `input_len` - Length in bytes, or -1 for NUL-terminated
/// * `fixed_columns` - Column count, or 0 to use the widest row
/// * `layout` - `MATREAD_LAYOUT_COLUMN_MAJOR` or `MATREAD_LAYOUT_ROW_MAJOR`
/// * `dest` - Destination buffer (may be NULL when `dest_len` is 0)
/// * `dest_len` - Length of `dest` in doubles; must equal `rows * columns`
///
/// # Returns
/// MATREAD_OK on success, MATREAD_ERR_USAGE on a length mismatch, or the
/// parse error code. `dest` is left untouched on failure.
///
/// # Safety
/// `input` must be valid as for `matread_parse`; `dest` must be valid for
/// `dest_len` writes.
#[no_mangle]
pub unsafe extern "C" fn matread_parse_into(
    input: *const c_char,
    input_len: c_int,
    fixed_columns: c_int,
    layout: c_int,
    dest: *mut f64,
    dest_len: usize,
) -> c_int {
    let start = Instant::now();

    audit_call_start(
        "matread_parse_into",
        &[
            ("input_ptr", &sanitize_pointer(input)),
            ("input_len", &input_len.to_string()),
            ("fixed_columns", &fixed_columns.to_string()),
            ("layout", &layout.to_string()),
            ("dest", &sanitize_pointer(dest as *const f64)),
            ("dest_len", &dest_len.to_string()),
        ],
    );

    clear_error();

    if input.is_null() || (dest.is_null() && dest_len > 0) {
        return null_pointer("matread_parse_into", start);
    }

    let result = read_options(fixed_columns, layout).and_then(|options| {
        let bytes = get_input_bytes(input, input_len)?;
        let parsed = parse_with_options(bytes, &options.parse).map_err(report)?;
        let dest: &mut [f64] = if dest_len == 0 {
            &mut []
        } else {
            slice::from_raw_parts_mut(dest, dest_len)
        };
        materialize_into(&parsed, options.layout, dest).map_err(report)
    });

    complete("matread_parse_into", start, result)
}
