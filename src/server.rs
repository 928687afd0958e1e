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

use anyhow::Result;
use axum::Router;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::annotation::{load_matcher, DictionaryMatcher, TermMatcher};
use crate::api::{self, AppState};
use crate::compendium::{CompendiumSource, HttpCompendiumClient, Language};
use crate::config::{CompendiumServerConfig, MatcherSettings};
use crate::load_config_file;

pub struct CompendiumServer {
    host: String,
    port: u16,
    state: AppState,
}

impl CompendiumServer {
    /// Create a new CompendiumServer from a configuration file
    pub async fn new(config_path: PathBuf, port: u16) -> Result<Self> {
        let config = load_config_file(&config_path)?;
        info!("Loaded configuration from {}", config_path.display());
        Self::from_config(&config, port)
    }

    /// Create a server from an already loaded configuration, listening on `port`
    pub fn from_config(config: &CompendiumServerConfig, port: u16) -> Result<Self> {
        config.validate()?;

        let client = HttpCompendiumClient::from_settings(&config.upstream);
        info!(
            "Compendium upstream: {} (IdType={})",
            client.base_url(),
            config.upstream.id_type
        );

        let matcher = Self::create_matcher(&config.matcher)?;

        Ok(Self::from_parts(
            config.host.clone(),
            port,
            Arc::new(client),
            matcher,
            config.upstream.default_language,
        ))
    }

    /// Assemble a server from explicit collaborators
    pub fn from_parts(
        host: impl Into<String>,
        port: u16,
        source: Arc<dyn CompendiumSource>,
        matcher: Arc<dyn TermMatcher>,
        default_language: Language,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            state: AppState::new(source, matcher, default_language),
        }
    }

    fn create_matcher(settings: &MatcherSettings) -> Result<Arc<dyn TermMatcher>> {
        match &settings.terms_path {
            Some(path) => Ok(Arc::new(load_matcher(path)?)),
            None => {
                warn!("No matcher.termsPath configured; BioC passages will carry no annotations");
                Ok(Arc::new(DictionaryMatcher::empty()))
            }
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The complete application router, including Swagger UI and CORS
    pub fn router(&self) -> Router {
        api::build_router(self.state.clone())
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting web API on {addr}");
        info!("Swagger UI available at http://{addr}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Compendium Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down Compendium Server");
}
