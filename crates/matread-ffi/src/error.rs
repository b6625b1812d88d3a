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

//! Error handling for FFI.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

// =============================================================================
// Error Management (Thread-Local)
// =============================================================================

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> = const { std::cell::RefCell::new(None) };
}

pub(crate) fn set_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg.replace('\0', "\\0")).ok();
    });
}

pub(crate) fn clear_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Get the last error message for the current thread.
///
/// Returns NULL if the last `matread_*` call on this thread succeeded.
///
/// # Thread Safety
///
/// Each thread keeps its own error state. Call this from the thread that
/// received the error code.
///
/// # Lifetime
///
/// The returned pointer is valid until the next `matread_*` call on this
/// thread. Copy the string if you need to keep it.
///
/// # Example (C)
///
/// ```c
/// MatreadMatrix* m = NULL;
/// if (matread_read("data.txt", 0, MATREAD_LAYOUT_COLUMN_MAJOR, &m) != MATREAD_OK) {
///     fprintf(stderr, "%s\n", matread_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn matread_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error for the current thread.
#[no_mangle]
pub extern "C" fn matread_clear_error() {
    clear_error();
}

/// Get the thread-local error message as a String (for internal use).
///
/// Returns an empty string if no error occurred.
pub(crate) fn get_thread_local_error() -> String {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.to_string_lossy().into_owned(),
        None => String::new(),
    })
}
