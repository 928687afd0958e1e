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

//! OpenAPI Integration Tests
//!
//! Verifies that the OpenAPI document lists every endpoint and schema, and that
//! the complete router serves it alongside Swagger UI.

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use compendium_server::api::ApiDoc;
use compendium_server::CompendiumServerBuilder;
use std::sync::Arc;
use test_support::MockCompendium;
use test_case::test_case;
use tower::ServiceExt;
use utoipa::OpenApi;

#[test_case("/health" ; "health")]
#[test_case("/interactions_multiple_sources" ; "multiple sources")]
#[test_case("/interactions_single_source" ; "single source")]
#[test_case("/interactions_multiple_gtins" ; "multiple gtins")]
#[test_case("/data_single_gtin" ; "single gtin data")]
#[test_case("/BioC_annotations" ; "bioc")]
fn test_openapi_documents_get_endpoint(path: &str) {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert!(
        json["paths"][path]["get"].is_object(),
        "GET {path} should be documented"
    );
}

#[test]
fn test_openapi_documents_query_parameters() {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let params = json["paths"]["/interactions_multiple_gtins"]["get"]["parameters"]
        .as_array()
        .unwrap();

    let names: Vec<&str> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"gtins"));
    assert!(names.contains(&"language"));
    assert!(params.iter().all(|p| p["in"] == "query"));
}

#[test_case("Interaction")]
#[test_case("Drug")]
#[test_case("BioCCollection")]
#[test_case("BioCAnnotation")]
#[test_case("ErrorResponse")]
fn test_openapi_has_schema(name: &str) {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert!(
        json["components"]["schemas"][name].is_object(),
        "schema {name} should be registered"
    );
}

#[tokio::test]
async fn test_router_serves_openapi_json() {
    let server = CompendiumServerBuilder::new()
        .with_source(Arc::new(MockCompendium::new()))
        .build()
        .unwrap();

    let response = server
        .router()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["info"]["title"], "Compendium Server API");
}

#[tokio::test]
async fn test_root_redirects_to_swagger_ui() {
    let server = CompendiumServerBuilder::new()
        .with_source(Arc::new(MockCompendium::new()))
        .build()
        .unwrap();

    let response = server
        .router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/docs/");
}
