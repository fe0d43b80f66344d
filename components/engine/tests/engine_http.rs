// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use kvcache_mock_runtime::{CancellationToken, HttpServer, events::parse_event_id};
use mock_engine::{EngineConfig, EngineState, engine_router, tokenizer::tokenize_prompt};
use reqwest::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

struct TestEngine {
    base_url: String,
    client: reqwest::Client,
    token: CancellationToken,
}

impl TestEngine {
    async fn start(config: EngineConfig) -> Self {
        let component = config.component;
        let state = Arc::new(EngineState::new(config));
        let server = HttpServer::bind(component, "127.0.0.1:0", engine_router(state))
            .await
            .unwrap();
        let token = CancellationToken::new();
        let (addr, _handle) = server.spawn(token.clone());
        TestEngine {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            token,
        }
    }

    async fn engine_a() -> Self {
        Self::start(EngineConfig::engine_a()).await
    }

    async fn engine_b() -> Self {
        Self::start(EngineConfig::engine_b()).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut req = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        if let Some(body) = body {
            req = req
                .header("content-type", "application/json")
                .body(body.to_string());
        }
        let resp = req.send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn post_bytes(&self, path: &str, body: Vec<u8>) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(&body.to_string()))
            .await
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    async fn stats(&self) -> Value {
        let (status, body) = self.get("/stats").await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

impl Drop for TestEngine {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[tokio::test]
async fn test_health_reports_capabilities() {
    let a = TestEngine::engine_a().await;
    let (status, body) = a.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": true, "engine": "mock-llm-a", "tokenize_enabled": true})
    );

    let b = TestEngine::engine_b().await;
    let (status, body) = b.request(Method::POST, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": true, "engine": "mock-llm-b", "tokenize_enabled": false})
    );
}

#[tokio::test]
async fn test_chat_completion_on_engine_a() {
    let a = TestEngine::engine_a().await;
    let (status, body) = a
        .post(
            "/v1/chat/completions",
            json!({"model": "x", "messages": [{"role": "user", "content": "hi"}]}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["served_by"], "mock-llm-a");
    assert_eq!(body["model"], "x");
    assert_eq!(body["object"], "chat.completion");
    assert_eq!(body["usage"]["prompt_tokens"], 8);
    assert_eq!(body["usage"]["completion_tokens"], 8);
    assert_eq!(body["usage"]["total_tokens"], 16);
    assert_eq!(body["choices"][0]["index"], 0);
    assert_eq!(body["choices"][0]["message"]["role"], "assistant");
    assert_eq!(
        body["choices"][0]["message"]["content"],
        "mock response from mock-llm-a"
    );

    let (prefix, _) = parse_event_id(body["id"].as_str().unwrap()).unwrap();
    assert_eq!(prefix, "chatcmpl");

    assert_eq!(a.stats().await["chat_calls"], 1);
}

#[rstest]
#[case(Some(r#"{"messages": []}"#))]
#[case(Some(r#"{"model": ""}"#))]
#[case(Some("not json"))]
#[case(None)]
#[tokio::test]
async fn test_chat_completion_never_rejects_body(#[case] body: Option<&str>) {
    let b = TestEngine::engine_b().await;
    let (status, resp) = b
        .request(Method::POST, "/v1/chat/completions", body)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["model"], "mock-model");
    assert_eq!(resp["served_by"], "mock-llm-b");
    assert_eq!(b.stats().await["chat_calls"], 1);
}

#[tokio::test]
async fn test_chat_ids_increase() {
    let a = TestEngine::engine_a().await;
    let (_, first) = a.post("/v1/chat/completions", json!({})).await;
    let (_, second) = a.post("/v1/chat/completions", json!({})).await;

    let (_, first) = parse_event_id(first["id"].as_str().unwrap()).unwrap();
    let (_, second) = parse_event_id(second["id"].as_str().unwrap()).unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_tokenize_on_engine_a() {
    let a = TestEngine::engine_a().await;
    let prompt = "please route same prompt";
    let (status, body) = a.post("/tokenize", json!({"prompt": prompt})).await;

    assert_eq!(status, StatusCode::OK);
    let expected = tokenize_prompt(prompt);
    assert_eq!(body["count"], expected.len());
    assert_eq!(body["tokens"], json!(expected));
    assert_eq!(body["max_model_len"], 8192);

    // same text through chat-style messages
    let (_, again) = a
        .post(
            "/tokenize",
            json!({"messages": [{"role": "user", "content": prompt}]}),
        )
        .await;
    assert_eq!(again["tokens"], body["tokens"]);

    assert_eq!(a.stats().await["tokenize_calls"], 2);
}

#[rstest]
#[case(r#"{"prompt": "   "}"#)]
#[case(r#"{}"#)]
#[case("garbage")]
#[tokio::test]
async fn test_tokenize_empty_prompt(#[case] body: &str) {
    let a = TestEngine::engine_a().await;
    let (status, resp) = a.request(Method::POST, "/tokenize", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["count"], 1);
    assert_eq!(resp["tokens"], json!([0]));
}

#[rstest]
#[case(Method::POST, Some(r#"{"prompt": "hello"}"#))]
#[case(Method::POST, Some("garbage"))]
#[case(Method::GET, None)]
#[case(Method::PUT, Some("{}"))]
#[tokio::test]
async fn test_tokenize_unavailable_on_engine_b(#[case] method: Method, #[case] body: Option<&str>) {
    let b = TestEngine::engine_b().await;
    let (status, resp) = b.request(method, "/tokenize", body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp,
        json!({"error": "tokenize not available on this instance"})
    );
}

#[tokio::test]
async fn test_stats_shape() {
    let a = TestEngine::engine_a().await;
    let stats = a.stats().await;
    assert_eq!(stats["engine_id"], "mock-llm-a");
    assert_eq!(stats["tokenize_calls"], 0);
    assert_eq!(stats["chat_calls"], 0);
    assert!(stats["timestamp_unix_milli"].as_i64().unwrap() > 0);

    let b = TestEngine::engine_b().await;
    let stats = b.stats().await;
    assert_eq!(stats["engine_id"], "mock-llm-b");
    assert!(stats.get("tokenize_calls").is_none());
}

#[tokio::test]
async fn test_reset_clears_counters() {
    let a = TestEngine::engine_a().await;
    a.post("/tokenize", json!({"prompt": "hi"})).await;
    a.post("/v1/chat/completions", json!({})).await;

    let stats = a.stats().await;
    assert_eq!(stats["tokenize_calls"], 1);
    assert_eq!(stats["chat_calls"], 1);

    let (status, body) = a.post("/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let stats = a.stats().await;
    assert_eq!(stats["tokenize_calls"], 0);
    assert_eq!(stats["chat_calls"], 0);
}

#[rstest]
#[case("/reset")]
#[case("/v1/chat/completions")]
#[case("/tokenize")]
#[tokio::test]
async fn test_wrong_method_is_rejected(#[case] path: &str) {
    let a = TestEngine::engine_a().await;
    let (status, body) = a.get(path).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "method not allowed"}));
}

#[tokio::test]
async fn test_custom_engine_id() {
    let engine = TestEngine::start(EngineConfig::engine_b().with_engine_id("vllm-b")).await;
    let (_, body) = engine.post("/v1/chat/completions", json!({})).await;
    assert_eq!(body["served_by"], "vllm-b");
    assert_eq!(body["choices"][0]["message"]["content"], "mock response from vllm-b");
}

#[tokio::test]
async fn test_unknown_route() {
    let b = TestEngine::engine_b().await;
    let (status, body) = b.get("/v1/models").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn test_large_bodies_are_accepted() {
    let a = TestEngine::engine_a().await;
    // well above axum's default 2 MB body limit
    let content = "word ".repeat(500_000);
    assert!(content.len() > 2 * 1024 * 1024);

    let (status, body) = a
        .post("/v1/chat/completions", json!({"model": "big", "messages": [{"role": "user", "content": content}]}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "big");
    assert_eq!(body["served_by"], "mock-llm-a");

    let (status, body) = a.post("/tokenize", json!({"prompt": content})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 500_000);

    let stats = a.stats().await;
    assert_eq!(stats["chat_calls"], 1);
    assert_eq!(stats["tokenize_calls"], 1);
}

#[tokio::test]
async fn test_tokenize_replaces_invalid_utf8() {
    let a = TestEngine::engine_a().await;
    let (status, body) = a
        .post_bytes("/tokenize", b"{\"prompt\": \"hello wor\xffld\"}".to_vec())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["tokens"], json!(tokenize_prompt("hello wor\u{FFFD}ld")));
}
