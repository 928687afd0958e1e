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

//! OpenAPI documentation, served at `/openapi.json` with Swagger UI at `/docs/`.

use utoipa::OpenApi;

use super::error::{ErrorDetail, ErrorResponse};
use super::responses::HealthResponse;
use crate::annotation::{BioCAnnotation, BioCCollection, BioCDocument, BioCLocation, BioCPassage};
use crate::compendium::{Drug, Interaction, Language};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::interactions_multiple_sources,
        super::handlers::interactions_single_source,
        super::handlers::interactions_multiple_gtins,
        super::handlers::data_single_gtin,
        super::handlers::bioc_annotations,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            ErrorDetail,
            Language,
            Interaction,
            Drug,
            BioCCollection,
            BioCDocument,
            BioCPassage,
            BioCAnnotation,
            BioCLocation,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Interactions", description = "Drug-drug interactions from the compendium"),
        (name = "Products", description = "Compendium product data"),
        (name = "Annotations", description = "Ontology annotations in BioC format"),
    ),
    info(
        title = "Compendium Server API",
        version = "0.1.0",
        description = "Drug interaction and annotation views over the Documedis compendium.\n\nEvery endpoint accepts a `language` query parameter (`fr-CH` or `de-CH`). Each GTIN is looked up in the compendium on every request; a failed lookup fails the whole request.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
