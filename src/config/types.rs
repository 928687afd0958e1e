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

//! Configuration types for the compendium server.
//!
//! All fields use camelCase in YAML/JSON. Unknown fields are rejected so that
//! typos (for example `log_level` instead of `logLevel`) fail loudly at startup
//! instead of being silently replaced by defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compendium::Language;

/// Default Documedis products endpoint.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://documedis.hcisolutions.ch/2020-01/api/products";

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Root configuration for the compendium server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompendiumServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub matcher: MatcherSettings,
}

impl Default for CompendiumServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            upstream: UpstreamSettings::default(),
            matcher: MatcherSettings::default(),
        }
    }
}

/// Settings for the upstream compendium API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpstreamSettings {
    /// Products endpoint; the GTIN is appended as a path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value sent as the `IdType` query parameter
    #[serde(default = "default_id_type")]
    pub id_type: String,
    /// Language used when a request does not specify one
    #[serde(default)]
    pub default_language: Language,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            id_type: default_id_type(),
            default_language: Language::default(),
        }
    }
}

/// Settings for the term matcher used by the BioC annotation endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatcherSettings {
    /// YAML or JSON term dictionary. When absent the matcher has no terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_UPSTREAM_BASE_URL.to_string()
}

fn default_id_type() -> String {
    "gtin".to_string()
}

impl CompendiumServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("Invalid port: {} (cannot be 0)", self.port));
        }

        if self.host.trim().is_empty() {
            return Err(anyhow!("host cannot be empty"));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(anyhow!(
                "Invalid logLevel '{}'. Valid values are: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        self.upstream.validate()
    }
}

impl UpstreamSettings {
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow!(
                "upstream.baseUrl must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }

        if self.id_type.trim().is_empty() {
            return Err(anyhow!("upstream.idType cannot be empty"));
        }

        Ok(())
    }
}
