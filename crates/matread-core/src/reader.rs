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

//! File acquisition and the end-to-end read pipeline.
//!
//! [`read_matrix`] is the invocation surface: it reads the whole file into
//! one buffer, parses it, materializes the destination matrix and releases
//! the buffer. Any failure aborts the call with a single [`ParseError`].

use crate::error::{ParseError, ParseResult};
use crate::limits::Limits;
use crate::materialize::materialize;
use crate::matrix::Matrix;
use crate::options::{ParseOptions, ReadOptions};
use crate::parser::parse_with_options;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the full contents of `path`.
///
/// The size declared by the file's metadata is checked against
/// `limits.max_file_size` before any memory is reserved. Reading then runs
/// to end of file, so pipes and procfs entries that declare a size of zero
/// still deliver their contents; the limit is enforced on the bytes read.
///
/// # Errors
///
/// - [`ParseError::Io`] if the file cannot be opened
/// - [`ParseError::ReadFailed`] if reading fails after the file was opened
/// - [`ParseError::FileTooLarge`] if it exceeds `limits.max_file_size`
/// - [`ParseError::OutOfMemory`] if the buffer cannot be allocated
/// - [`ParseError::IoTruncated`] if a regular file yields fewer bytes than
///   its metadata declared
pub fn read_file(path: impl AsRef<Path>, limits: &Limits) -> ParseResult<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    let metadata = file.metadata().map_err(|e| ParseError::read_failed(path, e))?;
    let declared = metadata.len();

    let too_large = |size: u64| ParseError::FileTooLarge {
        path: path.to_path_buf(),
        size,
        max: limits.max_file_size,
    };

    if declared > limits.max_file_size {
        return Err(too_large(declared));
    }

    let capacity = usize::try_from(declared).map_err(|_| ParseError::OutOfMemory {
        requested: usize::MAX,
    })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ParseError::OutOfMemory {
            requested: capacity,
        })?;

    // One byte past the limit is enough to tell an oversized stream apart.
    file.take(limits.max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| ParseError::read_failed(path, e))?;

    let actual = buffer.len() as u64;
    if actual > limits.max_file_size {
        return Err(too_large(actual));
    }
    if metadata.is_file() && actual < declared {
        return Err(ParseError::IoTruncated {
            expected: declared,
            actual,
        });
    }

    debug!(path = %path.display(), declared, bytes = actual, "read file");
    Ok(buffer)
}

/// Parse and materialize an in-memory buffer.
pub fn read_matrix_from_bytes(input: &[u8], options: &ReadOptions) -> ParseResult<Matrix> {
    let parsed = parse_with_options(input, &options.parse)?;
    materialize(&parsed, options.layout)
}

/// Read a matrix from `path` in column-major order.
///
/// `fixed_columns` of `None` or `Some(0)` infers the column count from the
/// longest row. With a fixed count, shorter rows are zero-padded and longer
/// rows lose their extra values.
///
/// # Examples
///
/// ```no_run
/// use matread_core::read_matrix;
///
/// let matrix = read_matrix("data.txt", None)?;
/// println!("{} rows, {} columns", matrix.rows(), matrix.columns());
/// # Ok::<(), matread_core::ParseError>(())
/// ```
pub fn read_matrix(path: impl AsRef<Path>, fixed_columns: Option<usize>) -> ParseResult<Matrix> {
    let options = ReadOptions::new(ParseOptions {
        fixed_columns,
        ..ParseOptions::default()
    });
    read_matrix_with_options(path, &options)
}

/// Read a matrix from `path` with explicit options.
pub fn read_matrix_with_options(path: impl AsRef<Path>, options: &ReadOptions) -> ParseResult<Matrix> {
    let buffer = read_file(path, &options.parse.limits)?;
    read_matrix_from_bytes(&buffer, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::materialize::NAN_SENTINEL_BITS;
    use crate::matrix::Layout;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_read_file_contents() {
        let file = temp_file(b"1 2\n3 4\n");
        let bytes = read_file(file.path(), &Limits::default()).unwrap();
        assert_eq!(bytes, b"1 2\n3 4\n");
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file("/nonexistent/matrix.txt", &Limits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().starts_with("can't open file"));
    }

    #[test]
    fn test_read_file_too_large() {
        let file = temp_file(b"1 2 3 4 5\n");
        let limits = Limits {
            max_file_size: 4,
            ..Limits::default()
        };
        let err = read_file(file.path(), &limits).unwrap_err();
        assert!(matches!(err, ParseError::FileTooLarge { size: 10, max: 4, .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_file_procfs_without_declared_size() {
        // procfs reports a length of zero for files that do have contents.
        let bytes = read_file("/proc/self/status", &Limits::default()).unwrap();
        assert!(bytes.starts_with(b"Name:"));

        let err = read_matrix("/proc/self/status", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedToken);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_file_limit_applies_to_undeclared_size() {
        let limits = Limits {
            max_file_size: 16,
            ..Limits::default()
        };
        let err = read_file("/proc/self/status", &limits).unwrap_err();
        assert!(matches!(err, ParseError::FileTooLarge { size: 17, max: 16, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_matrix_from_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("matrix.fifo");
        let created = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !created {
            return;
        }

        let writer_path = fifo.clone();
        let writer = std::thread::spawn(move || {
            std::fs::write(writer_path, b"1 2\n3 4\n").unwrap();
        });

        let matrix = read_matrix(&fifo, None).unwrap();
        writer.join().unwrap();

        assert_eq!((matrix.rows(), matrix.columns()), (2, 2));
        assert_eq!(matrix.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_failure_after_open() {
        // Directories open on Linux but fail on read.
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path(), &Limits::default()).unwrap_err();
        assert!(matches!(err, ParseError::ReadFailed { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().starts_with("can't read the file"));
    }

    #[test]
    fn test_read_matrix_column_major() {
        let file = temp_file(b"1 2 3\n4 5\n");
        let matrix = read_matrix(file.path(), None).unwrap();
        assert_eq!(matrix.layout(), Layout::ColumnMajor);
        assert_eq!((matrix.rows(), matrix.columns()), (2, 3));
        assert_eq!(matrix.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 0.0]);
    }

    #[test]
    fn test_read_matrix_fixed_columns() {
        let file = temp_file(b"1 2 3\n4\n");
        let matrix = read_matrix(file.path(), Some(2)).unwrap();
        assert_eq!((matrix.rows(), matrix.columns()), (2, 2));
        assert_eq!(matrix.get(0, 1), Some(2.0));
        assert_eq!(matrix.get(1, 1), Some(0.0));
    }

    #[test]
    fn test_read_matrix_nan() {
        let file = temp_file(b"NaN 2\n");
        let matrix = read_matrix(file.path(), None).unwrap();
        assert_eq!(matrix.raw_bits(0, 0), Some(NAN_SENTINEL_BITS));
    }

    #[test]
    fn test_read_matrix_malformed() {
        let file = temp_file(b"1 2\nfoo 4\n");
        let err = read_matrix(file.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedToken);
    }

    #[test]
    fn test_read_matrix_from_bytes_row_major() {
        let options = ReadOptions::default().with_layout(Layout::RowMajor);
        let matrix = read_matrix_from_bytes(b"1 2\n3 4\n", &options).unwrap();
        assert_eq!(matrix.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
