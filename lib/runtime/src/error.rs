// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error responses shared by every mock endpoint.
//!
//! Every failure is reported as `{"error": "<message>"}` with the status that
//! matches the variant. Handlers never panic on bad input: decoding problems
//! become [`ApiError::InvalidRequest`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Error body returned by the mocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded
    #[error("invalid request")]
    InvalidRequest,

    /// The route exists but not for this HTTP method
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The route or operation does not exist on this instance
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Read the first JSON value of a request body.
///
/// Invalid UTF-8 is replaced with U+FFFD before parsing, and bytes after the
/// first value are ignored. Returns `None` for an empty or whitespace-only body.
pub fn first_json_value<T: DeserializeOwned>(body: &[u8]) -> Option<serde_json::Result<T>> {
    let text = String::from_utf8_lossy(body);
    let mut values = serde_json::Deserializer::from_str(&text).into_iter::<T>();
    values.next()
}

/// Decode a JSON request body with [`first_json_value`].
///
/// A literal `null` decodes to `T::default()`. An empty body, or a first value
/// that does not match `T`, is an [`ApiError::InvalidRequest`].
pub fn decode_json<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    match first_json_value::<Option<T>>(body) {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(err)) => {
            tracing::debug!(%err, "failed to decode request body");
            Err(ApiError::InvalidRequest)
        }
        None => {
            tracing::debug!("empty request body");
            Err(ApiError::InvalidRequest)
        }
    }
}

/// Handler for routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("not found")
}
