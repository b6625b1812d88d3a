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

//! Audit logging for FFI function calls.
//!
//! Every entry point logs its start, its outcome and its duration under the
//! `matread_ffi::audit` target.
//!
//! # Log Levels
//!
//! - **DEBUG**: sanitized parameters
//! - **INFO**: call entry and successful exit
//! - **ERROR**: failures with code and message
//!
//! Raw pointer addresses and full inputs never reach the log; see
//! [`sanitize_pointer`] and [`sanitize_c_string`].

use std::cell::RefCell;
use std::os::raw::{c_char, c_int};
use std::time::Duration;
use tracing::{debug, error, info};

// =============================================================================
// Audit Context
// =============================================================================

/// The FFI call in progress on the current thread.
#[derive(Debug, Clone)]
pub struct AuditContext {
    /// The current function being called
    pub function: &'static str,
    /// Nested call depth
    pub depth: usize,
    /// Thread ID for correlation
    pub thread_id: std::thread::ThreadId,
}

thread_local! {
    static AUDIT_CONTEXT: RefCell<Option<AuditContext>> = const { RefCell::new(None) };
}

/// Get the current audit context.
///
/// Returns `None` if no FFI call is in progress on this thread.
pub fn get_audit_context() -> Option<AuditContext> {
    AUDIT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

fn set_audit_context(context: Option<AuditContext>) {
    AUDIT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = context;
    });
}

// =============================================================================
// Parameter Sanitization
// =============================================================================

/// Sanitize a pointer for logging.
///
/// Only the low 16 bits are kept, which is enough to correlate calls without
/// leaking the address space layout.
pub fn sanitize_pointer<T>(ptr: *const T) -> String {
    if ptr.is_null() {
        "NULL".to_string()
    } else {
        format!("PTR@{:04x}", ptr as usize & 0xFFFF)
    }
}

/// Sanitize a string for logging, cutting it at `max_len` characters.
pub fn sanitize_string(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => format!("{:?}", s),
        Some((cut, _)) => format!("{:?}... ({} bytes total)", &s[..cut], s.len()),
    }
}

/// Sanitize a C string pointer for logging.
///
/// # Safety
///
/// `ptr` must be NULL or point to a NUL-terminated string.
pub unsafe fn sanitize_c_string(ptr: *const c_char, max_len: usize) -> String {
    if ptr.is_null() {
        "NULL".to_string()
    } else {
        match std::ffi::CStr::from_ptr(ptr).to_str() {
            Ok(s) => sanitize_string(s, max_len),
            Err(_) => "<invalid UTF-8>".to_string(),
        }
    }
}

// =============================================================================
// Audit Logging Functions
// =============================================================================

/// Log the start of an FFI function call.
pub fn audit_call_start(function: &'static str, params: &[(&str, &str)]) {
    let thread_id = std::thread::current().id();
    let depth = get_audit_context().map_or(0, |ctx| ctx.depth + 1);

    set_audit_context(Some(AuditContext {
        function,
        depth,
        thread_id,
    }));

    info!(
        target: "matread_ffi::audit",
        function = function,
        thread_id = ?thread_id,
        depth = depth,
        "FFI call started"
    );

    if !params.is_empty() {
        debug!(
            target: "matread_ffi::audit",
            function = function,
            ?params,
            "FFI call parameters"
        );
    }
}

/// Log successful completion of an FFI function call.
pub fn audit_call_success(function: &'static str, duration: Duration) {
    info!(
        target: "matread_ffi::audit",
        function = function,
        duration_ms = duration.as_secs_f64() * 1000.0,
        status = "success",
        "FFI call completed"
    );

    set_audit_context(None);
}

/// Log failure of an FFI function call.
pub fn audit_call_failure(
    function: &'static str,
    error_code: c_int,
    error_message: &str,
    duration: Duration,
) {
    error!(
        target: "matread_ffi::audit",
        function = function,
        error_code = error_code,
        error_message = error_message,
        duration_ms = duration.as_secs_f64() * 1000.0,
        status = "failure",
        "FFI call failed"
    );

    set_audit_context(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_sanitize_pointer() {
        assert_eq!(sanitize_pointer(ptr::null::<u8>()), "NULL");
        let value = 5u8;
        let sanitized = sanitize_pointer(&value as *const u8);
        assert!(sanitized.starts_with("PTR@"));
        assert_eq!(sanitized.len(), 8);
    }

    #[test]
    fn test_sanitize_string_truncates() {
        assert_eq!(sanitize_string("1 2", 10), "\"1 2\"");
        let long = sanitize_string("1 2 3 4 5 6", 3);
        assert!(long.starts_with("\"1 2\"..."));
        assert!(long.contains("11 bytes total"));
    }

    #[test]
    fn test_sanitize_string_multibyte_boundary() {
        let s = sanitize_string("ééé", 2);
        assert!(s.starts_with("\"éé\""));
    }

    #[test]
    fn test_sanitize_c_string() {
        let s = CString::new("data.txt").unwrap();
        assert_eq!(unsafe { sanitize_c_string(s.as_ptr(), 64) }, "\"data.txt\"");
        assert_eq!(unsafe { sanitize_c_string(ptr::null(), 64) }, "NULL");
    }

    #[test]
    fn test_context_lifecycle() {
        audit_call_start("matread_test", &[("fixed_columns", "0")]);
        let ctx = get_audit_context().unwrap();
        assert_eq!(ctx.function, "matread_test");
        assert_eq!(ctx.depth, 0);

        audit_call_success("matread_test", Duration::from_millis(1));
        assert!(get_audit_context().is_none());

        audit_call_start("matread_test", &[]);
        audit_call_failure("matread_test", -5, "can't parse file", Duration::ZERO);
        assert!(get_audit_context().is_none());
    }
}
