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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: matrix commands (read, info)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use self::core::{CoreCommands, LayoutArg, OutputFormat};
pub use utility::UtilityCommands;

/// matread - read whitespace-delimited numeric text into a dense matrix
///
/// # Examples
///
/// ```bash
/// # Print a matrix as text
/// matread read data.txt
///
/// # Force four columns and emit JSON
/// matread read data.txt --columns 4 --format json
///
/// # Show dimensions and NaN count
/// matread info data.txt
/// ```
#[derive(Parser)]
#[command(name = "matread")]
#[command(author, version, about = "matread - numeric matrix reader", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, parsing or writing output fails, or if the
    /// arguments are invalid.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_read_arguments() {
        let cli = Cli::try_parse_from([
            "matread", "read", "data.txt", "-c", "4", "--layout", "row", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Core(CoreCommands::Read {
                file,
                columns,
                layout,
                format,
                output,
            }) => {
                assert_eq!(file, "data.txt");
                assert_eq!(columns, Some(4));
                assert_eq!(layout, LayoutArg::Row);
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
            _ => panic!("expected read command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["matread", "info", "data.txt", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_columns_rejected() {
        assert!(Cli::try_parse_from(["matread", "read", "data.txt", "-c", "-1"]).is_err());
    }
}
