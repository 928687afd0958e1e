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

//! Configuration management for the compendium server.
//!
//! Configuration files are YAML (JSON is accepted as a fallback) with
//! POSIX-style environment variable interpolation:
//! - `${VAR_NAME}` - Required variable
//! - `${VAR_NAME:-default}` - Variable with default value
//!
//! ```yaml
//! host: "${SERVER_HOST:-0.0.0.0}"
//! port: ${SERVER_PORT:-8080}
//! logLevel: "${LOG_LEVEL:-info}"
//! upstream:
//!   baseUrl: "https://documedis.hcisolutions.ch/2020-01/api/products"
//!   idType: gtin
//!   defaultLanguage: fr-CH
//! matcher:
//!   termsPath: config/terms.yaml
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

pub use loader::{from_yaml_str, load_config_file, load_document, save_config_file, ConfigError};
pub use types::{
    CompendiumServerConfig, MatcherSettings, UpstreamSettings, DEFAULT_UPSTREAM_BASE_URL,
};
