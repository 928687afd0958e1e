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

//! Route definitions.

use axum::{extract::Extension, response::Redirect, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};
use super::openapi::ApiDoc;

/// Data endpoints, without documentation or CORS.
pub fn build_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/interactions_multiple_sources",
            get(handlers::interactions_multiple_sources),
        )
        .route(
            "/interactions_single_source",
            get(handlers::interactions_single_source),
        )
        .route(
            "/interactions_multiple_gtins",
            get(handlers::interactions_multiple_gtins),
        )
        .route("/data_single_gtin", get(handlers::data_single_gtin))
        .route("/BioC_annotations", get(handlers::bioc_annotations))
        .layer(Extension(state))
}

async fn docs_redirect() -> Redirect {
    Redirect::temporary("/docs/")
}

/// Complete application: data endpoints, Swagger UI at `/docs` (also reached
/// from `/`) and the OpenAPI document at `/openapi.json`.
pub fn build_router(state: AppState) -> Router {
    build_api_router(state)
        .route("/", get(docs_redirect))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
