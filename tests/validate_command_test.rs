// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the `compendium-server validate` command.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run validate command and capture output
fn run_validate(config_path: &str, show_resolved: bool) -> (bool, String) {
    let mut args = vec!["validate", "--config", config_path];
    if show_resolved {
        args.push("--show-resolved");
    }
    let output = Command::new(env!("CARGO_BIN_EXE_compendium-server"))
        .args(&args)
        .env_remove("COMPENDIUM_VALIDATE_PORT")
        .output()
        .expect("Failed to execute validate command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (output.status.success(), stdout)
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config");
    path.to_string_lossy().to_string()
}

#[test]
fn test_validate_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "server.yaml",
        "host: 127.0.0.1\nport: 8081\nupstream:\n  defaultLanguage: de-CH\n",
    );

    let (success, stdout) = run_validate(&path, false);
    assert!(success, "validate should succeed: {stdout}");
    assert!(stdout.contains("[OK] Configuration file is valid"));
    assert!(stdout.contains("Default language: de-CH"));
    assert!(stdout.contains("annotations disabled"));
}

#[test]
fn test_validate_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "server.yaml", "port: 8080\nlog_level: info\n");

    let (success, stdout) = run_validate(&path, false);
    assert!(!success);
    assert!(stdout.contains("[ERROR] Configuration is invalid"));
    assert!(stdout.contains("log_level"));
}

#[test]
fn test_validate_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let (success, stdout) = run_validate(&path.to_string_lossy(), false);
    assert!(!success);
    assert!(stdout.contains("Configuration file not found"));
}

#[test]
fn test_validate_show_resolved_lists_variables() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "server.yaml",
        "port: ${COMPENDIUM_VALIDATE_PORT:-9091}\n",
    );

    let (success, stdout) = run_validate(&path, true);
    assert!(success, "validate should succeed: {stdout}");
    assert!(stdout.contains("Port: 9091"));
    assert!(stdout.contains("COMPENDIUM_VALIDATE_PORT (default)"));
}
