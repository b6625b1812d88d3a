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

//! Utility functions for FFI.

use crate::error::set_error;
use crate::types::{error_code, layout_from_code, MATREAD_ERR_INVALID_UTF8};
use matread_core::{ParseError, ParseOptions, ReadOptions};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::slice;

/// Maximum explicit input length accepted by `matread_parse` (1GB).
const MAX_FFI_INPUT_LEN: usize = 1024 * 1024 * 1024;

/// `input_len` value marking NUL-terminated input.
const NUL_TERMINATED: c_int = -1;

/// Record a reader error as the thread's last error and return its code.
pub(crate) fn report(err: ParseError) -> c_int {
    set_error(&err.to_string());
    error_code(&err)
}

/// Record a usage error and return `MATREAD_ERR_USAGE`.
pub(crate) fn usage_error(msg: &str) -> c_int {
    report(ParseError::usage(msg))
}

/// Build parse options from a raw column count.
///
/// A negative column count is a usage error; 0 infers the count.
pub(crate) fn parse_options(fixed_columns: c_int) -> Result<ParseOptions, c_int> {
    let columns = usize::try_from(fixed_columns)
        .map_err(|_| usage_error(&format!("fixed_columns must be >= 0, got {}", fixed_columns)))?;
    Ok(ParseOptions::builder().fixed_columns(columns).build())
}

/// Build read options from the raw FFI arguments.
///
/// A negative column count or an unknown layout code is a usage error.
pub(crate) fn read_options(fixed_columns: c_int, layout: c_int) -> Result<ReadOptions, c_int> {
    let parse = parse_options(fixed_columns)?;
    let layout = layout_from_code(layout)
        .ok_or_else(|| usage_error(&format!("unknown layout code {}", layout)))?;
    Ok(ReadOptions::new(parse).with_layout(layout))
}

/// Borrow input bytes from a C pointer.
///
/// # Arguments
/// * `input` - Pointer to the input buffer
/// * `input_len` - Length in bytes, or -1 for NUL-terminated
///
/// # Safety
/// `input` must be non-NULL and valid for `input_len` bytes, or point to a
/// NUL-terminated string when `input_len` is -1. Any other negative length is
/// a usage error.
pub(crate) unsafe fn get_input_bytes<'a>(
    input: *const c_char,
    input_len: c_int,
) -> Result<&'a [u8], c_int> {
    if input_len == NUL_TERMINATED {
        return Ok(CStr::from_ptr(input).to_bytes());
    }
    match usize::try_from(input_len) {
        Err(_) => Err(usage_error(&format!(
            "input_len must be >= 0 or -1 for NUL-terminated input, got {}",
            input_len
        ))),
        Ok(len) if len > MAX_FFI_INPUT_LEN => Err(usage_error(&format!(
            "input length {} exceeds maximum allowed {}",
            len, MAX_FFI_INPUT_LEN
        ))),
        Ok(len) => Ok(slice::from_raw_parts(input as *const u8, len)),
    }
}

/// Borrow a UTF-8 path from a NUL-terminated C string.
///
/// # Safety
/// `path` must be non-NULL and NUL-terminated.
pub(crate) unsafe fn get_path<'a>(path: *const c_char) -> Result<&'a str, c_int> {
    CStr::from_ptr(path).to_str().map_err(|e| {
        set_error(&format!("Invalid UTF-8 in filename: {}", e));
        MATREAD_ERR_INVALID_UTF8
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::get_thread_local_error;
    use crate::types::MATREAD_ERR_USAGE;
    use matread_core::Layout;

    #[test]
    fn test_read_options_valid() {
        let options = read_options(3, 1).unwrap();
        assert_eq!(options.parse.fixed_columns(), Some(3));
        assert_eq!(options.layout, Layout::RowMajor);

        let options = read_options(0, 0).unwrap();
        assert_eq!(options.parse.fixed_columns(), None);
        assert_eq!(options.layout, Layout::ColumnMajor);
    }

    #[test]
    fn test_read_options_negative_columns() {
        assert_eq!(read_options(-1, 0).unwrap_err(), MATREAD_ERR_USAGE);
        assert!(get_thread_local_error().starts_with("invalid usage"));
    }

    #[test]
    fn test_read_options_unknown_layout() {
        assert_eq!(read_options(0, 2).unwrap_err(), MATREAD_ERR_USAGE);
        assert!(get_thread_local_error().contains("layout"));
    }

    #[test]
    fn test_get_input_bytes() {
        let data = b"1 2\n3 4\0";
        let ptr = data.as_ptr() as *const c_char;
        unsafe {
            assert_eq!(get_input_bytes(ptr, -1).unwrap(), b"1 2\n3 4");
            assert_eq!(get_input_bytes(ptr, 3).unwrap(), b"1 2");
        }
    }

    #[test]
    fn test_get_input_bytes_rejects_other_negative_lengths() {
        let data = b"1 2\0";
        let ptr = data.as_ptr() as *const c_char;
        for len in [-2, -5, c_int::MIN] {
            let err = unsafe { get_input_bytes(ptr, len) }.unwrap_err();
            assert_eq!(err, MATREAD_ERR_USAGE);
            assert!(get_thread_local_error().contains("input_len"));
        }
    }

    #[test]
    fn test_get_path_invalid_utf8() {
        let bad = b"\xff\xfe.txt\0";
        let err = unsafe { get_path(bad.as_ptr() as *const c_char) }.unwrap_err();
        assert_eq!(err, MATREAD_ERR_INVALID_UTF8);
    }
}
