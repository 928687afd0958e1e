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

//! Helpers for writing configuration files in temporary directories.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal valid server configuration
pub const MINIMAL_CONFIG: &str = r#"
host: 127.0.0.1
port: 8080
logLevel: info
upstream:
  baseUrl: http://localhost:9999/api/products
  idType: gtin
  defaultLanguage: fr-CH
"#;

/// Write `content` to `name` inside a fresh temporary directory.
///
/// The directory is returned so that it lives as long as the test needs it.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}
