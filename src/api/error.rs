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

//! Error responses returned by the API.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::compendium::CompendiumError;

/// Error codes for API responses
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const PRODUCT_NOT_FOUND: &str = "PRODUCT_NOT_FOUND";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const UNEXPECTED_PAYLOAD: &str = "UNEXPECTED_PAYLOAD";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetail>,
}

/// Additional error details
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// GTIN whose lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// HTTP status returned by the compendium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    /// Technical error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<String>,
}

/// Result type of every data endpoint.
pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_REQUEST, message)
    }

    pub fn with_details(mut self, details: ErrorDetail) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the response with the status derived from its code.
    pub fn with_status(self) -> (StatusCode, Json<Self>) {
        let status = status_from_code(&self.code);
        (status, Json(self))
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::INVALID_REQUEST => StatusCode::BAD_REQUEST,
        error_codes::PRODUCT_NOT_FOUND => StatusCode::NOT_FOUND,
        error_codes::UPSTREAM_ERROR | error_codes::UPSTREAM_UNAVAILABLE => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<CompendiumError> for ErrorResponse {
    fn from(err: CompendiumError) -> Self {
        let message = err.to_string();
        let mut details = ErrorDetail {
            gtin: Some(err.gtin().to_string()),
            ..Default::default()
        };

        let code = match &err {
            CompendiumError::UpstreamStatus { status, .. } => {
                details.upstream_status = Some(status.as_u16());
                if status.as_u16() == 404 {
                    error_codes::PRODUCT_NOT_FOUND
                } else {
                    error_codes::UPSTREAM_ERROR
                }
            }
            CompendiumError::Transport { source, .. } => {
                details.technical_details = Some(source.to_string());
                error_codes::UPSTREAM_UNAVAILABLE
            }
            CompendiumError::Decode { reason, .. }
            | CompendiumError::UnexpectedShape { reason, .. } => {
                details.technical_details = Some(reason.clone());
                error_codes::UNEXPECTED_PAYLOAD
            }
        };

        ErrorResponse::new(code, message).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode as UpstreamStatus;
    use test_case::test_case;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new("TEST_CODE", "Test message");
        assert_eq!(response.code, "TEST_CODE");
        assert_eq!(response.message, "Test message");
        assert!(response.details.is_none());
    }

    #[test_case(error_codes::INVALID_REQUEST, StatusCode::BAD_REQUEST ; "invalid request")]
    #[test_case(error_codes::PRODUCT_NOT_FOUND, StatusCode::NOT_FOUND ; "not found")]
    #[test_case(error_codes::UPSTREAM_ERROR, StatusCode::BAD_GATEWAY ; "upstream error")]
    #[test_case(error_codes::UPSTREAM_UNAVAILABLE, StatusCode::BAD_GATEWAY ; "upstream unavailable")]
    #[test_case(error_codes::UNEXPECTED_PAYLOAD, StatusCode::INTERNAL_SERVER_ERROR ; "payload")]
    #[test_case("SOMETHING_ELSE", StatusCode::INTERNAL_SERVER_ERROR ; "unknown")]
    fn test_status_from_code(code: &str, expected: StatusCode) {
        let (status, _) = ErrorResponse::new(code, "msg").with_status();
        assert_eq!(status, expected);
    }

    #[test]
    fn test_upstream_404_maps_to_not_found() {
        let response = ErrorResponse::from(CompendiumError::UpstreamStatus {
            gtin: "7680000000000".to_string(),
            status: UpstreamStatus::NOT_FOUND,
        });

        assert_eq!(response.code, error_codes::PRODUCT_NOT_FOUND);
        let details = response.details.unwrap();
        assert_eq!(details.gtin.as_deref(), Some("7680000000000"));
        assert_eq!(details.upstream_status, Some(404));
    }

    #[test]
    fn test_upstream_5xx_maps_to_upstream_error() {
        let response = ErrorResponse::from(CompendiumError::UpstreamStatus {
            gtin: "1".to_string(),
            status: UpstreamStatus::SERVICE_UNAVAILABLE,
        });

        assert_eq!(response.code, error_codes::UPSTREAM_ERROR);
        assert_eq!(response.details.unwrap().upstream_status, Some(503));
    }

    #[test]
    fn test_shape_error_maps_to_unexpected_payload() {
        let response = ErrorResponse::from(CompendiumError::UnexpectedShape {
            gtin: "1".to_string(),
            reason: "missing 'components[0]'".to_string(),
        });

        assert_eq!(response.code, error_codes::UNEXPECTED_PAYLOAD);
        let (status, _) = response.with_status();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let response = ErrorResponse::new("X", "y").with_details(ErrorDetail {
            gtin: Some("1".to_string()),
            upstream_status: Some(500),
            technical_details: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["upstreamStatus"], 500);
        assert!(json["details"].get("technicalDetails").is_none());
    }
}
