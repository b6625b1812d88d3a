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

//! Zero-copy line and token scanning.
//!
//! Scanning never allocates: rows and tokens are borrowed sub-slices of the
//! input buffer, handed straight to numeric conversion.
//!
//! # Examples
//!
//! ```
//! use matread_core::scan::rows;
//!
//! let input = b"1 2\n\n 3\t4 5 \r\n";
//! let counts: Vec<usize> = rows(input).map(|row| row.token_count()).collect();
//! assert_eq!(counts, vec![2, 3]);
//! ```

/// Returns `true` for bytes that separate tokens within a line.
///
/// `\r` is treated as whitespace, which makes `\r\n` line endings behave
/// exactly like `\n`.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Trims the input at the first NUL byte, matching a NUL-terminated buffer.
#[inline]
fn effective_input(input: &[u8]) -> &[u8] {
    match memchr::memchr(0, input) {
        Some(end) => &input[..end],
        None => input,
    }
}

/// Iterator over every line of the input, including blank ones.
///
/// Yields `(line_number, bytes)` with 1-based line numbers. A trailing
/// newline does not produce a final empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
    line: usize,
    done: bool,
}

impl<'a> Lines<'a> {
    /// Create a line iterator over `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            rest: effective_input(input),
            line: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.line += 1;
        match memchr::memchr(b'\n', self.rest) {
            Some(pos) => {
                let line = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                if self.rest.is_empty() {
                    self.done = true;
                }
                Some((self.line, line))
            }
            None => {
                self.done = true;
                if self.rest.is_empty() {
                    None
                } else {
                    Some((self.line, self.rest))
                }
            }
        }
    }
}

/// Iterator over the whitespace-separated tokens of one line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    /// Create a token iterator over a single line.
    pub fn new(line: &'a [u8]) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.iter().position(|&b| !is_whitespace(b))?;
        let tail = &self.rest[start..];
        let len = tail
            .iter()
            .position(|&b| is_whitespace(b))
            .unwrap_or(tail.len());
        self.rest = &tail[len..];
        Some(&tail[..len])
    }
}

/// A non-blank line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Source line number (1-based).
    pub line: usize,
    /// Raw bytes of the line, without the newline.
    pub bytes: &'a [u8],
}

impl<'a> Row<'a> {
    /// Iterate over the tokens of this row.
    #[inline]
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens::new(self.bytes)
    }

    /// Count the tokens of this row without converting them.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

/// Iterate over the non-blank lines of `input`, in file order.
///
/// Lines holding only whitespace are skipped and never become rows.
pub fn rows(input: &[u8]) -> impl Iterator<Item = Row<'_>> {
    Lines::new(input)
        .filter(|(_, bytes)| bytes.iter().any(|&b| !is_whitespace(b)))
        .map(|(line, bytes)| Row { line, bytes })
}
