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

//! REST API of the compendium server.
//!
//! ## API Structure
//!
//! ```text
//! /health                          - Health check
//! /interactions_multiple_sources   - First-substance interactions, one list per GTIN
//! /interactions_single_source      - First-substance interactions of one GTIN
//! /interactions_multiple_gtins     - Interactions shared between GTINs
//! /data_single_gtin                - Product description and interactions
//! /BioC_annotations                - BioC annotations of a product's interaction texts
//! /openapi.json, /docs             - OpenAPI document and Swagger UI
//! /                                - Redirect to /docs/
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use error::{error_codes, ApiResult, ErrorDetail, ErrorResponse};
pub use handlers::AppState;
pub use openapi::ApiDoc;
pub use responses::HealthResponse;
pub use routes::{build_api_router, build_router};
