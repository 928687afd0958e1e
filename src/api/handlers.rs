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

//! Endpoint handlers.
//!
//! Upstream lookups inside one request run sequentially, one per GTIN, and
//! the first failure aborts the request.

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    response::Json,
};
use log::{debug, warn};
use std::sync::Arc;

use super::error::{ApiResult, ErrorResponse};
use super::models::{parse_gtins, parse_single_gtin, GtinQuery, GtinsQuery};
use super::responses::HealthResponse;
use crate::annotation::{annotate_drug, BioCCollection, TermMatcher};
use crate::compendium::{
    extract_drug, extract_interactions, shared_interactions, CompendiumError, CompendiumSource,
    Drug, Interaction, Language, SubstanceScope,
};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CompendiumSource>,
    pub matcher: Arc<dyn TermMatcher>,
    pub default_language: Language,
}

impl AppState {
    pub fn new(
        source: Arc<dyn CompendiumSource>,
        matcher: Arc<dyn TermMatcher>,
        default_language: Language,
    ) -> Self {
        Self {
            source,
            matcher,
            default_language,
        }
    }

    async fn interactions(
        &self,
        gtin: &str,
        language: Language,
        scope: SubstanceScope,
    ) -> Result<Vec<Interaction>, CompendiumError> {
        let product = self.source.fetch_product(gtin, language).await?;
        extract_interactions(gtin, &product, scope)
    }

    async fn interactions_per_gtin(
        &self,
        gtins: &[String],
        language: Language,
        scope: SubstanceScope,
    ) -> Result<Vec<Vec<Interaction>>, CompendiumError> {
        let mut all = Vec::with_capacity(gtins.len());
        for gtin in gtins {
            all.push(self.interactions(gtin, language, scope).await?);
        }
        Ok(all)
    }

    async fn drug(&self, gtin: &str, language: Language) -> Result<Drug, CompendiumError> {
        let product = self.source.fetch_product(gtin, language).await?;
        extract_drug(gtin, &product)
    }
}

fn reject<T>(message: String) -> ApiResult<T> {
    debug!("Rejecting request: {message}");
    Err(ErrorResponse::invalid_request(message).with_status())
}

fn upstream_failure<T>(err: CompendiumError) -> ApiResult<T> {
    warn!("Compendium lookup failed: {err}");
    Err(ErrorResponse::from(err).with_status())
}

/// Resolve a multi-GTIN query into its GTIN list and language
fn multi(
    state: &AppState,
    query: Result<Query<GtinsQuery>, QueryRejection>,
) -> Result<(Vec<String>, Language), String> {
    let Query(query) = query.map_err(|e| e.body_text())?;
    let gtins = parse_gtins(&query.gtins)?;
    Ok((gtins, query.language.unwrap_or(state.default_language)))
}

/// Resolve a single-GTIN query into its GTIN and language
fn single(
    state: &AppState,
    query: Result<Query<GtinQuery>, QueryRejection>,
) -> Result<(String, Language), String> {
    let Query(query) = query.map_err(|e| e.body_text())?;
    let gtin = parse_single_gtin(&query.gtin)?;
    Ok((gtin, query.language.unwrap_or(state.default_language)))
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Interactions of the first substance of each product, one list per GTIN
#[utoipa::path(
    get,
    path = "/interactions_multiple_sources",
    params(GtinsQuery),
    responses(
        (status = 200, description = "One interaction list per GTIN, in request order", body = Vec<Vec<Interaction>>),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "A GTIN is unknown to the compendium", body = ErrorResponse),
        (status = 502, description = "The compendium failed", body = ErrorResponse),
    ),
    tag = "Interactions"
)]
pub async fn interactions_multiple_sources(
    Extension(state): Extension<AppState>,
    query: Result<Query<GtinsQuery>, QueryRejection>,
) -> ApiResult<Vec<Vec<Interaction>>> {
    let (gtins, language) = match multi(&state, query) {
        Ok(parsed) => parsed,
        Err(message) => return reject(message),
    };

    match state
        .interactions_per_gtin(&gtins, language, SubstanceScope::First)
        .await
    {
        Ok(all) => Ok(Json(all)),
        Err(e) => upstream_failure(e),
    }
}

/// Interactions of the first substance of one product
#[utoipa::path(
    get,
    path = "/interactions_single_source",
    params(GtinQuery),
    responses(
        (status = 200, description = "Interactions of the product", body = Vec<Interaction>),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "GTIN is unknown to the compendium", body = ErrorResponse),
        (status = 502, description = "The compendium failed", body = ErrorResponse),
    ),
    tag = "Interactions"
)]
pub async fn interactions_single_source(
    Extension(state): Extension<AppState>,
    query: Result<Query<GtinQuery>, QueryRejection>,
) -> ApiResult<Vec<Interaction>> {
    let (gtin, language) = match single(&state, query) {
        Ok(parsed) => parsed,
        Err(message) => return reject(message),
    };

    match state
        .interactions(&gtin, language, SubstanceScope::First)
        .await
    {
        Ok(interactions) => Ok(Json(interactions)),
        Err(e) => upstream_failure(e),
    }
}

/// Interactions listed for more than one of the given products
///
/// Returns `{id: "0", name: "No interaction found", mechanism: ""}` when the
/// products share no interaction.
#[utoipa::path(
    get,
    path = "/interactions_multiple_gtins",
    params(GtinsQuery),
    responses(
        (status = 200, description = "Shared interactions, or the no-interaction placeholder", body = Vec<Interaction>),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "A GTIN is unknown to the compendium", body = ErrorResponse),
        (status = 502, description = "The compendium failed", body = ErrorResponse),
    ),
    tag = "Interactions"
)]
pub async fn interactions_multiple_gtins(
    Extension(state): Extension<AppState>,
    query: Result<Query<GtinsQuery>, QueryRejection>,
) -> ApiResult<Vec<Interaction>> {
    let (gtins, language) = match multi(&state, query) {
        Ok(parsed) => parsed,
        Err(message) => return reject(message),
    };

    match state
        .interactions_per_gtin(&gtins, language, SubstanceScope::All)
        .await
    {
        Ok(per_gtin) => {
            let shared = shared_interactions(&per_gtin);
            debug!(
                "{} GTIN(s) share {} interaction(s)",
                gtins.len(),
                shared.iter().filter(|i| !i.is_none_found()).count()
            );
            Ok(Json(shared))
        }
        Err(e) => upstream_failure(e),
    }
}

/// Product description and the interactions of all its substances
#[utoipa::path(
    get,
    path = "/data_single_gtin",
    params(GtinQuery),
    responses(
        (status = 200, description = "The product", body = Drug),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "GTIN is unknown to the compendium", body = ErrorResponse),
        (status = 502, description = "The compendium failed", body = ErrorResponse),
    ),
    tag = "Products"
)]
pub async fn data_single_gtin(
    Extension(state): Extension<AppState>,
    query: Result<Query<GtinQuery>, QueryRejection>,
) -> ApiResult<Drug> {
    let (gtin, language) = match single(&state, query) {
        Ok(parsed) => parsed,
        Err(message) => return reject(message),
    };

    match state.drug(&gtin, language).await {
        Ok(drug) => Ok(Json(drug)),
        Err(e) => upstream_failure(e),
    }
}

/// Ontology annotations of a product's interaction texts in BioC format
#[utoipa::path(
    get,
    path = "/BioC_annotations",
    params(GtinQuery),
    responses(
        (status = 200, description = "A collection with one document for the product", body = BioCCollection),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "GTIN is unknown to the compendium", body = ErrorResponse),
        (status = 502, description = "The compendium failed", body = ErrorResponse),
    ),
    tag = "Annotations"
)]
pub async fn bioc_annotations(
    Extension(state): Extension<AppState>,
    query: Result<Query<GtinQuery>, QueryRejection>,
) -> ApiResult<BioCCollection> {
    let (gtin, language) = match single(&state, query) {
        Ok(parsed) => parsed,
        Err(message) => return reject(message),
    };

    match state.drug(&gtin, language).await {
        Ok(drug) => {
            let today = chrono::Utc::now().date_naive();
            Ok(Json(annotate_drug(&drug, state.matcher.as_ref(), today)))
        }
        Err(e) => upstream_failure(e),
    }
}
