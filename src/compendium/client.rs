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

//! Upstream compendium client.
//!
//! One `GET {base_url}/{gtin}?IdType={id_type}` per product, with the locale
//! sent as `Accept-Language`. Any non-success status fails the call; there is
//! no retry and no caching.

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::models::Language;
use crate::config::UpstreamSettings;

/// Errors raised while fetching or reading a compendium product.
#[derive(Debug, thiserror::Error)]
pub enum CompendiumError {
    #[error("Compendium returned HTTP {status} for GTIN '{gtin}'")]
    UpstreamStatus { gtin: String, status: StatusCode },

    #[error("Failed to reach the compendium for GTIN '{gtin}': {source}")]
    Transport {
        gtin: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Compendium response for GTIN '{gtin}' is not valid JSON: {reason}")]
    Decode { gtin: String, reason: String },

    #[error("Unexpected compendium payload for GTIN '{gtin}': {reason}")]
    UnexpectedShape { gtin: String, reason: String },
}

impl CompendiumError {
    pub fn gtin(&self) -> &str {
        match self {
            CompendiumError::UpstreamStatus { gtin, .. }
            | CompendiumError::Transport { gtin, .. }
            | CompendiumError::Decode { gtin, .. }
            | CompendiumError::UnexpectedShape { gtin, .. } => gtin,
        }
    }
}

/// Anything that can return the raw compendium document for a GTIN.
#[async_trait]
pub trait CompendiumSource: Send + Sync {
    /// Fetch the product document for `gtin` in `language`.
    async fn fetch_product(&self, gtin: &str, language: Language)
        -> Result<Value, CompendiumError>;
}

/// reqwest-backed client for the Documedis products API.
#[derive(Debug, Clone)]
pub struct HttpCompendiumClient {
    client: Client,
    base_url: String,
    id_type: String,
}

impl HttpCompendiumClient {
    pub fn new(base_url: impl Into<String>, id_type: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, id_type)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        id_type: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            id_type: id_type.into(),
        }
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.id_type.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, gtin: &str) -> String {
        format!("{}/{gtin}", self.base_url)
    }
}

#[async_trait]
impl CompendiumSource for HttpCompendiumClient {
    async fn fetch_product(
        &self,
        gtin: &str,
        language: Language,
    ) -> Result<Value, CompendiumError> {
        let url = self.product_url(gtin);
        debug!("Fetching compendium product {gtin} ({language}) from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("IdType", self.id_type.as_str())])
            .header(ACCEPT_LANGUAGE, language.as_str())
            .send()
            .await
            .map_err(|source| CompendiumError::Transport {
                gtin: gtin.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompendiumError::UpstreamStatus {
                gtin: gtin.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CompendiumError::Transport {
                gtin: gtin.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|e| CompendiumError::Decode {
            gtin: gtin.to_string(),
            reason: e.to_string(),
        })
    }
}
