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

//! Shell completion generation - Tab completion for various shells

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Generate a shell completion script to stdout for a given command.
///
/// # Errors
///
/// Does not fail in practice; returns `Result` for consistency with the
/// other commands.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Installation instructions for shell completions.
///
/// Shell names are case-insensitive. Returns `None` for unsupported shells.
///
/// # Examples
///
/// ```
/// use matread_cli::commands::print_installation_instructions;
///
/// let instructions = print_installation_instructions("bash").unwrap();
/// assert!(instructions.contains("matread completion bash"));
/// assert!(print_installation_instructions("tcsh").is_none());
/// ```
pub fn print_installation_instructions(shell: &str) -> Option<&'static str> {
    let text = match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(matread completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(matread completion bash)"' >> ~/.bashrc

# Or save to completions directory:
matread completion bash > ~/.local/share/bash-completion/completions/matread
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# For current session only:
eval "$(matread completion zsh)"

# Or save to completions directory (ensure directory is in $fpath):
matread completion zsh > ~/.zsh/completions/_matread
"#
        }
        "fish" => {
            r#"# Fish completion installation:

matread completion fish > ~/.config/fish/completions/matread.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to your PowerShell profile ($PROFILE):
matread completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add to your ~/.elvish/rc.elv:
eval (matread completion elvish)
"#
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions_known_shells() {
        for shell in ["bash", "zsh", "fish", "powershell", "pwsh", "elvish"] {
            let instructions = print_installation_instructions(shell).unwrap();
            assert!(instructions.contains("matread completion"));
        }
    }

    #[test]
    fn test_installation_instructions_case_insensitive() {
        assert_eq!(
            print_installation_instructions("BASH"),
            print_installation_instructions("bash")
        );
    }

    #[test]
    fn test_installation_instructions_unsupported() {
        assert!(print_installation_instructions("tcsh").is_none());
    }
}
