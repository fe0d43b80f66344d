// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::{any, post},
};
use kvcache_mock_runtime::{
    ApiError,
    error::{decode_json, method_not_allowed, not_found},
    next_event_id,
    protocols::Ack,
    utils::timestamp_unix_milli,
};

use crate::COMPONENT_NAME;
use crate::layout::build_layout;
use crate::protocols::{
    HealthResponse, LookupResponse, StatsResponse, TokenEventResponse, TokensRequest,
};
use crate::state::{ControllerState, TokenOp};

/// Build the controller's HTTP routes.
///
/// Request bodies are not size limited; token lists can be arbitrarily long.
pub fn controller_router(state: Arc<ControllerState>) -> Router {
    Router::new()
        .route("/health", any(health_handler))
        .route("/stats", any(stats_handler))
        .route("/reset", post(reset_handler).fallback(method_not_allowed))
        .route("/lookup", post(lookup_handler).fallback(method_not_allowed))
        .route("/pin", post(pin_handler).fallback(method_not_allowed))
        .route("/compress", post(compress_handler).fallback(method_not_allowed))
        .route("/evict", post(evict_handler).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        component: COMPONENT_NAME.to_string(),
    })
}

async fn stats_handler(State(state): State<Arc<ControllerState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.snapshot(),
        preferred_endpoint: state.config().preferred_endpoint.clone(),
        timestamp_unix_milli: timestamp_unix_milli(),
    })
}

async fn reset_handler(State(state): State<Arc<ControllerState>>) -> Json<Ack> {
    state.reset();
    tracing::debug!("[{COMPONENT_NAME}] counters reset");
    Json(Ack::ok())
}

#[tracing::instrument(skip_all, level = "debug")]
async fn lookup_handler(
    State(state): State<Arc<ControllerState>>,
    body: Bytes,
) -> Result<Json<LookupResponse>, ApiError> {
    let request: TokensRequest = decode_json(&body).inspect_err(|_| {
        state.record_lookup_failure();
    })?;

    let config = state.config();
    let layout = build_layout(
        request.num_tokens(),
        &config.preferred_endpoint,
        &config.engines,
    );
    state.record_lookup_success();

    let event_id = next_event_id("lookup");
    tracing::debug!(%event_id, num_tokens = request.num_tokens(), "lookup served");

    Ok(Json(LookupResponse {
        event_id,
        layout_info: layout,
    }))
}

async fn pin_handler(
    State(state): State<Arc<ControllerState>>,
    body: Bytes,
) -> Result<Json<TokenEventResponse>, ApiError> {
    token_op(&state, TokenOp::Pin, &body)
}

async fn compress_handler(
    State(state): State<Arc<ControllerState>>,
    body: Bytes,
) -> Result<Json<TokenEventResponse>, ApiError> {
    token_op(&state, TokenOp::Compress, &body)
}

async fn evict_handler(
    State(state): State<Arc<ControllerState>>,
    body: Bytes,
) -> Result<Json<TokenEventResponse>, ApiError> {
    token_op(&state, TokenOp::Evict, &body)
}

fn token_op(
    state: &ControllerState,
    op: TokenOp,
    body: &[u8],
) -> Result<Json<TokenEventResponse>, ApiError> {
    let request: TokensRequest = decode_json(body)?;
    state.record_token_op(op);

    let event_id = next_event_id(op.as_str());
    tracing::debug!(%event_id, num_tokens = request.num_tokens(), "{} recorded", op.as_str());

    Ok(Json(TokenEventResponse {
        event_id,
        num_tokens: request.num_tokens(),
    }))
}
