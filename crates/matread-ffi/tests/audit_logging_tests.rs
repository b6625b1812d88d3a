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

//! Tests for audit logging of FFI calls.

use matread_ffi::audit::get_audit_context;
use matread_ffi::{matread_free_matrix, matread_parse, MatreadMatrix, MATREAD_OK};
use std::io::{self, Write};
use std::os::raw::c_char;
use std::ptr;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_capture<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("matread_ffi::audit=debug"))
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

unsafe fn parse(input: &[u8]) -> (i32, *mut MatreadMatrix) {
    let mut matrix: *mut MatreadMatrix = ptr::null_mut();
    let code = matread_parse(
        input.as_ptr() as *const c_char,
        input.len() as i32,
        0,
        0,
        &mut matrix,
    );
    (code, matrix)
}

#[test]
fn test_successful_call_is_logged() {
    let logs = with_capture(|| unsafe {
        let (code, matrix) = parse(b"1 2\n3 4\n");
        assert_eq!(code, MATREAD_OK);
        matread_free_matrix(matrix);
    });

    assert!(logs.contains("FFI call started"));
    assert!(logs.contains("FFI call parameters"));
    assert!(logs.contains("FFI call completed"));
    assert!(logs.contains("matread_parse"));
    assert!(get_audit_context().is_none());
}

#[test]
fn test_failed_call_is_logged() {
    let logs = with_capture(|| unsafe {
        let (code, matrix) = parse(b"1 x\n");
        assert_ne!(code, MATREAD_OK);
        assert!(matrix.is_null());
    });

    assert!(logs.contains("FFI call failed"));
    assert!(logs.contains("can't parse file"));
    assert!(get_audit_context().is_none());
}

#[test]
fn test_input_contents_not_logged() {
    let logs = with_capture(|| unsafe {
        let (_, matrix) = parse(b"123456789 987654321\n");
        matread_free_matrix(matrix);
    });

    assert!(!logs.contains("987654321"));
}
