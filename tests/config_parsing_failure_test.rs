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

//! Integration tests for config parsing failures.
//!
//! These tests verify that the config loader correctly rejects invalid configurations
//! with appropriate error messages. This ensures that typos and snake_case fields
//! are caught before they can cause silent failures.

use compendium_server::config::load_config_file;
use compendium_server::Language;
use std::fs;
use tempfile::TempDir;

/// Helper to write YAML to a temp file and attempt to load it
fn try_load_config(yaml: &str) -> Result<(), String> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("test-config.yaml");
    fs::write(&config_path, yaml).expect("Failed to write config file");

    match load_config_file(&config_path) {
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Helper to assert that loading fails with a specific field mentioned in error
fn assert_fails_with_field(yaml: &str, expected_field: &str) {
    let result = try_load_config(yaml);
    assert!(
        result.is_err(),
        "Config should fail to load, but it succeeded"
    );
    let err = result.expect_err("Expected error");
    assert!(
        err.contains(expected_field),
        "Error should mention '{expected_field}' but got: {err}"
    );
}

// ==================== snake_case rejection ====================

#[test]
fn test_load_fails_with_snake_case_log_level() {
    let yaml = r#"
host: 0.0.0.0
port: 8080
log_level: info
"#;
    assert_fails_with_field(yaml, "log_level");
}

#[test]
fn test_load_fails_with_snake_case_base_url() {
    let yaml = r#"
upstream:
  base_url: https://example.test/api/products
"#;
    assert_fails_with_field(yaml, "base_url");
}

#[test]
fn test_load_fails_with_snake_case_default_language() {
    let yaml = r#"
upstream:
  default_language: de-CH
"#;
    assert_fails_with_field(yaml, "default_language");
}

#[test]
fn test_load_fails_with_snake_case_terms_path() {
    let yaml = r#"
matcher:
  terms_path: config/terms.yaml
"#;
    assert_fails_with_field(yaml, "terms_path");
}

// ==================== Unknown fields and bad values ====================

#[test]
fn test_load_fails_with_unknown_top_level_field() {
    let yaml = r#"
port: 8080
persistConfig: true
"#;
    assert_fails_with_field(yaml, "persistConfig");
}

#[test]
fn test_load_fails_with_unsupported_language() {
    let yaml = r#"
upstream:
  defaultLanguage: en-US
"#;
    assert_fails_with_field(yaml, "en-US");
}

#[test]
fn test_load_fails_with_invalid_log_level() {
    let yaml = r#"
logLevel: verbose
"#;
    assert_fails_with_field(yaml, "logLevel");
}

#[test]
fn test_load_fails_with_port_zero() {
    assert_fails_with_field("port: 0\n", "port");
}

#[test]
fn test_load_fails_with_non_http_base_url() {
    let yaml = r#"
upstream:
  baseUrl: ftp://example.test/products
"#;
    assert_fails_with_field(yaml, "baseUrl");
}

#[test]
fn test_load_fails_with_missing_env_var() {
    let yaml = r#"
upstream:
  baseUrl: ${COMPENDIUM_TEST_UNSET_BASE_URL}
"#;
    assert_fails_with_field(yaml, "COMPENDIUM_TEST_UNSET_BASE_URL");
}

// ==================== Valid configs ====================

#[test]
fn test_empty_document_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("server.yaml");
    fs::write(&config_path, "{}\n").unwrap();

    let config = load_config_file(&config_path).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.upstream.id_type, "gtin");
    assert_eq!(config.upstream.default_language, Language::Fr);
    assert!(config.matcher.terms_path.is_none());
}

#[test]
fn test_json_config_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("server.json");
    fs::write(
        &config_path,
        r#"{"port": 9000, "upstream": {"defaultLanguage": "de-CH"}}"#,
    )
    .unwrap();

    let config = load_config_file(&config_path).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.upstream.default_language, Language::De);
}
