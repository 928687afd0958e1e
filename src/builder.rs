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

use std::path::PathBuf;
use std::sync::Arc;

use crate::annotation::{load_matcher, DictionaryMatcher, MatcherError, TermMatcher};
use crate::compendium::{CompendiumSource, HttpCompendiumClient, Language};
use crate::config::DEFAULT_UPSTREAM_BASE_URL;
use crate::server::CompendiumServer;

/// Builder for creating a CompendiumServer instance programmatically
pub struct CompendiumServerBuilder {
    host: String,
    port: u16,
    base_url: String,
    id_type: String,
    default_language: Language,
    source: Option<Arc<dyn CompendiumSource>>,
    matcher: Option<Arc<dyn TermMatcher>>,
    terms_path: Option<PathBuf>,
}

impl Default for CompendiumServerBuilder {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            id_type: "gtin".to_string(),
            default_language: Language::default(),
            source: None,
            matcher: None,
            terms_path: None,
        }
    }
}

impl CompendiumServerBuilder {
    /// Create a new CompendiumServerBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Upstream products endpoint used when no source is injected
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_id_type(mut self, id_type: impl Into<String>) -> Self {
        self.id_type = id_type.into();
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Replace the HTTP client with another compendium source
    pub fn with_source(mut self, source: Arc<dyn CompendiumSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use an explicit term matcher; takes precedence over `with_terms_file`
    pub fn with_matcher(mut self, matcher: Arc<dyn TermMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Load the dictionary matcher from a YAML or JSON term list at build time
    pub fn with_terms_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.terms_path = Some(path.into());
        self
    }

    /// Build a CompendiumServer instance
    pub fn build(self) -> Result<CompendiumServer, MatcherError> {
        let source = match self.source {
            Some(source) => source,
            None => Arc::new(HttpCompendiumClient::new(self.base_url, self.id_type)),
        };

        let matcher: Arc<dyn TermMatcher> = match (self.matcher, self.terms_path) {
            (Some(matcher), _) => matcher,
            (None, Some(path)) => Arc::new(load_matcher(path)?),
            (None, None) => Arc::new(DictionaryMatcher::empty()),
        };

        Ok(CompendiumServer::from_parts(
            self.host,
            self.port,
            source,
            matcher,
            self.default_language,
        ))
    }
}
