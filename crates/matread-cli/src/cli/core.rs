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

//! Core matrix commands for the matread CLI.

use crate::commands;
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use matread_core::Layout;

/// Memory layout selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutArg {
    /// Column-major order (cell `(r, c)` at `c * rows + r`)
    #[default]
    Column,
    /// Row-major order (cell `(r, c)` at `r * columns + c`)
    Row,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Column => Layout::ColumnMajor,
            LayoutArg::Row => Layout::RowMajor,
        }
    }
}

/// Output format for `matread read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One matrix row per line, values separated by a space
    #[default]
    Text,
    /// JSON object with dimensions and the flat data array
    Json,
}

/// Core commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Read a numeric text file and print the matrix
    ///
    /// Tokens are separated by spaces or tabs, one matrix row per line. Blank
    /// lines are skipped. Without --columns the column count is the widest
    /// row and shorter rows are padded with zeros. With --columns N every row
    /// is padded with zeros or truncated to exactly N values. `NaN` (any case)
    /// marks a missing value.
    Read {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Fixed column count (0 infers it from the widest row)
        #[arg(short, long, value_name = "N")]
        columns: Option<usize>,

        /// Order of the flat `data` array in JSON output
        #[arg(long, value_enum, default_value_t = LayoutArg::Column)]
        layout: LayoutArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show matrix dimensions and NaN statistics
    Info {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Fixed column count (0 infers it from the widest row)
        #[arg(short, long, value_name = "N")]
        columns: Option<usize>,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read or parsed, or the output
    /// cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Read {
                file,
                columns,
                layout,
                format,
                output,
            } => commands::read(&file, columns, layout.into(), format, output.as_deref()),
            CoreCommands::Info { file, columns } => commands::info(&file, columns),
        }
    }
}
