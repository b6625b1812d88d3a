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

//! Memory management functions for FFI.

use crate::types::MatreadMatrix;

/// Poison pointer value used to detect double-free and use-after-free bugs.
///
/// Callers that poison their freed handles with this value get a safe
/// rejection instead of undefined behavior.
pub(crate) const POISON_PTR_MATRIX: usize = 0xDEADBEEF;

/// Check if a matrix pointer is valid (not NULL and not poisoned).
///
/// This only rules out NULL and the poison value; it cannot prove the pointer
/// refers to live memory.
#[inline]
pub(crate) fn is_valid_matrix_ptr(matrix: *const MatreadMatrix) -> bool {
    !matrix.is_null() && (matrix as usize) != POISON_PTR_MATRIX
}

/// Free a matrix handle.
///
/// # Safety
///
/// The pointer must have been returned by `matread_read` or `matread_parse`
/// and not freed before. NULL and the poison value are ignored.
#[no_mangle]
pub unsafe extern "C" fn matread_free_matrix(matrix: *mut MatreadMatrix) {
    if !is_valid_matrix_ptr(matrix) {
        return;
    }
    drop(Box::from_raw(matrix));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_pointer_validation() {
        assert!(!is_valid_matrix_ptr(ptr::null()));
        assert!(!is_valid_matrix_ptr(POISON_PTR_MATRIX as *const MatreadMatrix));
    }

    #[test]
    fn test_free_null_and_poison_are_ignored() {
        unsafe {
            matread_free_matrix(ptr::null_mut());
            matread_free_matrix(POISON_PTR_MATRIX as *mut MatreadMatrix);
        }
    }
}
