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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create a matread command
fn matread_cmd() -> Command {
    let mut cmd = Command::cargo_bin("matread").expect("Failed to find matread binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    matread_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("numeric matrix reader"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_read_help_describes_padding() {
    matread_cmd()
        .args(["read", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("padded with zeros"));
}

#[test]
fn test_version_output() {
    matread_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matread"));
}

#[test]
fn test_no_subcommand_fails() {
    matread_cmd().assert().failure();
}

// ===== Read Command Tests =====

#[test]
fn test_read_ragged_text() {
    let file = create_temp_file("1 2 3\n4 5\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .stdout("1 2 3\n4 5 0\n");
}

#[test]
fn test_read_fixed_columns() {
    let file = create_temp_file("1 2 3 4\n5\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .args(["--columns", "2"])
        .assert()
        .success()
        .stdout("1 2\n5 0\n");
}

#[test]
fn test_read_skips_blank_lines_and_keeps_nan() {
    let file = create_temp_file("1 nan\n\n\t\nNAN 4\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .stdout("1 NaN\nNaN 4\n");
}

#[test]
fn test_read_json_column_major() {
    let file = create_temp_file("1 2\nnan 4\n");

    let output = matread_cmd()
        .arg("read")
        .arg(file.path())
        .args(["-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rows"], 2);
    assert_eq!(value["columns"], 2);
    assert_eq!(value["layout"], "column-major");
    assert_eq!(value["data"], serde_json::json!([1.0, null, 2.0, 4.0]));
}

#[test]
fn test_read_json_row_major() {
    let file = create_temp_file("1 2\n3 4\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .args(["-f", "json", "--layout", "row"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"row-major\""))
        .stdout(predicate::str::contains("[1.0,2.0,3.0,4.0]"));
}

#[test]
fn test_read_to_output_file() {
    let file = create_temp_file("7 8\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("matrix.txt");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out).unwrap(), "7 8\n");
}

#[test]
fn test_read_empty_file() {
    let file = create_temp_file("");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .stdout("");
}

// ===== Error Tests =====

#[test]
fn test_read_malformed_token() {
    let file = create_temp_file("1 2\nfoo 4\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: can't parse file"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_read_missing_file() {
    matread_cmd()
        .args(["read", "/nonexistent/matrix.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't open file"));
}

#[test]
fn test_negative_columns_is_usage_error() {
    let file = create_temp_file("1 2\n");

    matread_cmd()
        .arg("read")
        .arg(file.path())
        .args(["--columns", "-3"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_max_file_size_env() {
    let file = create_temp_file("1 2 3 4\n");

    matread_cmd()
        .env("MATREAD_MAX_FILE_SIZE", "4")
        .arg("read")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't allocate enough memory"));
}

// ===== Info Command Tests =====

#[test]
fn test_info_output() {
    let file = create_temp_file("1 2 3\nnan 5\n");

    matread_cmd()
        .arg("info")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("2x3"))
        .stdout(predicate::str::contains("Cells:"))
        .stdout(predicate::str::contains("NaN cells:"));
}

#[test]
fn test_info_verbose_logs_to_stderr() {
    let file = create_temp_file("1 2\n");

    matread_cmd()
        .arg("info")
        .arg(file.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

// ===== Completion Tests =====

#[test]
fn test_completion_bash() {
    matread_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matread"));
}

#[test]
fn test_completion_install_instructions() {
    matread_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matread completion zsh"));
}

#[test]
fn test_completion_unsupported_shell() {
    matread_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
