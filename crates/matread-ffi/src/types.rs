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

//! FFI type definitions and error codes.

use matread_core::{ErrorKind, Layout, Matrix, ParseError};
use std::os::raw::c_int;

// =============================================================================
// Error Codes
// =============================================================================

pub const MATREAD_OK: c_int = 0;
pub const MATREAD_ERR_NULL_PTR: c_int = -1;
pub const MATREAD_ERR_INVALID_UTF8: c_int = -2;
pub const MATREAD_ERR_USAGE: c_int = -3;
pub const MATREAD_ERR_IO: c_int = -4;
pub const MATREAD_ERR_PARSE: c_int = -5;
pub const MATREAD_ERR_ALLOC: c_int = -6;

// =============================================================================
// Layout Codes
// =============================================================================

pub const MATREAD_LAYOUT_COLUMN_MAJOR: c_int = 0;
pub const MATREAD_LAYOUT_ROW_MAJOR: c_int = 1;

// =============================================================================
// Opaque Types
// =============================================================================

/// Opaque handle to a materialized matrix
pub struct MatreadMatrix {
    pub(crate) inner: Matrix,
}

// =============================================================================
// Conversions
// =============================================================================

/// Map a reader error to its FFI error code.
pub(crate) fn error_code(err: &ParseError) -> c_int {
    match err.kind() {
        ErrorKind::Usage => MATREAD_ERR_USAGE,
        ErrorKind::Io => MATREAD_ERR_IO,
        ErrorKind::OutOfMemory => MATREAD_ERR_ALLOC,
        ErrorKind::MalformedToken => MATREAD_ERR_PARSE,
    }
}

/// Decode a layout code.
pub(crate) fn layout_from_code(code: c_int) -> Option<Layout> {
    match code {
        MATREAD_LAYOUT_COLUMN_MAJOR => Some(Layout::ColumnMajor),
        MATREAD_LAYOUT_ROW_MAJOR => Some(Layout::RowMajor),
        _ => None,
    }
}

/// Encode a layout as its code.
pub(crate) fn layout_code(layout: Layout) -> c_int {
    match layout {
        Layout::ColumnMajor => MATREAD_LAYOUT_COLUMN_MAJOR,
        Layout::RowMajor => MATREAD_LAYOUT_ROW_MAJOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_by_kind() {
        assert_eq!(error_code(&ParseError::usage("x")), MATREAD_ERR_USAGE);
        assert_eq!(
            error_code(&ParseError::IoTruncated {
                expected: 4,
                actual: 2
            }),
            MATREAD_ERR_IO
        );
        assert_eq!(
            error_code(&ParseError::read_failed(
                "m.txt",
                std::io::Error::new(std::io::ErrorKind::Other, "eio")
            )),
            MATREAD_ERR_IO
        );
        assert_eq!(
            error_code(&ParseError::OutOfMemory { requested: 8 }),
            MATREAD_ERR_ALLOC
        );
        assert_eq!(
            error_code(&ParseError::malformed_token(1, 1, b"x")),
            MATREAD_ERR_PARSE
        );
    }

    #[test]
    fn test_layout_codes() {
        for layout in [Layout::ColumnMajor, Layout::RowMajor] {
            assert_eq!(layout_from_code(layout_code(layout)), Some(layout));
        }
        assert_eq!(layout_from_code(7), None);
        assert_eq!(layout_from_code(-1), None);
    }
}
