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

//! Parse and read options.

use crate::limits::Limits;
use crate::matrix::Layout;

/// Options controlling how a buffer is parsed.
///
/// `fixed_columns` forces every row to that many columns: shorter rows are
/// zero-padded, longer rows lose their extra tokens. `None` or `Some(0)`
/// infers the column count from the longest row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fixed column count, or `None` to infer it.
    pub fixed_columns: Option<usize>,
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use matread_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder()
    ///     .fixed_columns(3)
    ///     .max_cells(1_000)
    ///     .build();
    /// assert_eq!(opts.fixed_columns(), Some(3));
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }

    /// The effective fixed column count; zero is treated as "not fixed".
    pub fn fixed_columns(&self) -> Option<usize> {
        self.fixed_columns.filter(|&c| c > 0)
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    fixed_columns: Option<usize>,
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every row to `columns` columns.
    pub fn fixed_columns(mut self, columns: usize) -> Self {
        self.fixed_columns = Some(columns);
        self
    }

    /// Set the maximum number of matrix cells.
    pub fn max_cells(mut self, cells: usize) -> Self {
        self.limits.max_cells = cells;
        self
    }

    /// Set the maximum file size in bytes.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.limits.max_file_size = bytes;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the options.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            fixed_columns: self.fixed_columns,
            limits: self.limits,
        }
    }
}

/// Options for reading a matrix from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Parser options.
    pub parse: ParseOptions,
    /// Destination memory layout (column-major by default).
    pub layout: Layout,
}

impl ReadOptions {
    /// Create read options from parse options, keeping the default layout.
    pub fn new(parse: ParseOptions) -> Self {
        Self {
            parse,
            layout: Layout::default(),
        }
    }

    /// Set the destination layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_infer_columns() {
        let opts = ParseOptions::default();
        assert_eq!(opts.fixed_columns(), None);
        assert_eq!(opts.limits, Limits::default());
    }

    #[test]
    fn test_zero_fixed_columns_means_infer() {
        let opts = ParseOptions::builder().fixed_columns(0).build();
        assert_eq!(opts.fixed_columns, Some(0));
        assert_eq!(opts.fixed_columns(), None);
    }

    #[test]
    fn test_builder_sets_limits() {
        let opts = ParseOptions::builder()
            .max_cells(10)
            .max_file_size(20)
            .build();
        assert_eq!(opts.limits.max_cells, 10);
        assert_eq!(opts.limits.max_file_size, 20);
    }

    #[test]
    fn test_read_options_layout() {
        let opts = ReadOptions::default();
        assert_eq!(opts.layout, Layout::ColumnMajor);

        let opts = ReadOptions::new(ParseOptions::default()).with_layout(Layout::RowMajor);
        assert_eq!(opts.layout, Layout::RowMajor);
    }
}
