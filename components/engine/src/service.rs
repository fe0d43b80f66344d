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
    error::{method_not_allowed, not_found},
    next_event_id,
    protocols::Ack,
    utils::timestamp_unix_milli,
};

use crate::prompt::extract_prompt;
use crate::protocols::{
    ChatCompletionRequest, ChatCompletionResponse, HealthResponse, StatsResponse,
    TokenizeResponse,
};
use crate::state::EngineState;
use crate::tokenizer::{MAX_MODEL_LEN, tokenize_prompt};

/// Body of the 404 returned by engines without `/tokenize`
pub const TOKENIZE_UNAVAILABLE: &str = "tokenize not available on this instance";

/// Build an engine's HTTP routes. `/tokenize` is only served when the
/// engine's config enables it. Request bodies are not size limited.
pub fn engine_router(state: Arc<EngineState>) -> Router {
    let tokenize = if state.config().tokenize_enabled {
        post(tokenize_handler).fallback(method_not_allowed)
    } else {
        any(tokenize_unavailable)
    };

    Router::new()
        .route("/health", any(health_handler))
        .route("/stats", any(stats_handler))
        .route("/reset", post(reset_handler).fallback(method_not_allowed))
        .route(
            "/v1/chat/completions",
            post(chat_completions_handler).fallback(method_not_allowed),
        )
        .route("/tokenize", tokenize)
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<EngineState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        engine: state.engine_id().to_string(),
        tokenize_enabled: state.config().tokenize_enabled,
    })
}

async fn stats_handler(State(state): State<Arc<EngineState>>) -> Json<StatsResponse> {
    let stats = state.snapshot();
    Json(StatsResponse {
        tokenize_calls: state
            .config()
            .tokenize_enabled
            .then_some(stats.tokenize_calls),
        chat_calls: stats.chat_calls,
        engine_id: state.engine_id().to_string(),
        timestamp_unix_milli: timestamp_unix_milli(),
    })
}

async fn reset_handler(State(state): State<Arc<EngineState>>) -> Json<Ack> {
    state.reset();
    tracing::debug!("[{}] counters reset", state.config().component);
    Json(Ack::ok())
}

#[tracing::instrument(skip_all, level = "debug")]
async fn chat_completions_handler(
    State(state): State<Arc<EngineState>>,
    body: Bytes,
) -> Json<ChatCompletionResponse> {
    let request = ChatCompletionRequest::from_body(&body);
    state.record_chat();

    let id = next_event_id("chatcmpl");
    tracing::debug!(%id, engine = state.engine_id(), "chat completion served");

    Json(ChatCompletionResponse::canned(
        id,
        request.model_or_default(),
        state.engine_id(),
    ))
}

#[tracing::instrument(skip_all, level = "debug")]
async fn tokenize_handler(
    State(state): State<Arc<EngineState>>,
    body: Bytes,
) -> Json<TokenizeResponse> {
    let prompt = extract_prompt(&body);
    let tokens = tokenize_prompt(&prompt);
    state.record_tokenize();

    tracing::debug!(count = tokens.len(), "tokenized prompt");
    Json(TokenizeResponse {
        count: tokens.len(),
        tokens,
        max_model_len: MAX_MODEL_LEN,
    })
}

async fn tokenize_unavailable() -> ApiError {
    ApiError::not_found(TOKENIZE_UNAVAILABLE)
}
