// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Helpers for the gateway routing suites.
//!
//! The suites under `tests/` drive a running gateway and the mock services
//! over HTTP. When something they depend on is not reachable they print a
//! skip notice and return instead of failing.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use kvcache_mock_config::{env_or_default, env_var_nonempty, environment_names::testing as env_testing};
use serde::Serialize;
use serde_json::{Value, json};

pub const DEFAULT_MOCK_GATEWAY_URL: &str = "http://127.0.0.1:18888";
pub const DEFAULT_BYOE_GATEWAY_URL: &str = "http://127.0.0.1:18889";
pub const DEFAULT_CONTROLLER_URL: &str = "http://127.0.0.1:18081";
pub const DEFAULT_ENGINE_A_URL: &str = "http://127.0.0.1:18091";
pub const DEFAULT_ENGINE_B_URL: &str = "http://127.0.0.1:18092";
pub const DEFAULT_BYOE_MODEL: &str = "Qwen2.5-3B-Instruct";

/// Model name sent through the gateway when talking to the mocks
pub const MOCK_MODEL: &str = "mock-model";

/// Request timeout for real-engine (BYOE) runs
pub const BYOE_CLIENT_TIMEOUT: Duration = Duration::from_secs(3);

/// Pause between the two identical chat requests of the routing flow
pub const SECOND_REQUEST_DELAY: Duration = Duration::from_millis(600);

/// Pause before reading counters, for gateway-side cache calls to land
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Base URLs of the gateway and the three mocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEndpoints {
    pub gateway: String,
    pub controller: String,
    pub engine_a: String,
    pub engine_b: String,
}

impl MockEndpoints {
    /// `PIXIU_URL`, `CONTROLLER_URL`, `ENGINE_A_URL`, `ENGINE_B_URL` with local defaults
    pub fn from_env() -> Self {
        MockEndpoints {
            gateway: env_or_default(env_testing::PIXIU_URL, DEFAULT_MOCK_GATEWAY_URL),
            controller: env_or_default(env_testing::CONTROLLER_URL, DEFAULT_CONTROLLER_URL),
            engine_a: env_or_default(env_testing::ENGINE_A_URL, DEFAULT_ENGINE_A_URL),
            engine_b: env_or_default(env_testing::ENGINE_B_URL, DEFAULT_ENGINE_B_URL),
        }
    }

    /// The three mock services, in reset order
    pub fn mocks(&self) -> [&str; 3] {
        [&self.controller, &self.engine_a, &self.engine_b]
    }
}

/// Settings for running against a real engine and cache controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByoeSettings {
    pub gateway: String,
    pub vllm_endpoint: String,
    pub lmcache_endpoint: String,
    pub model: String,
}

impl ByoeSettings {
    /// `None` unless both `VLLM_ENDPOINT` and `LMCACHE_ENDPOINT` are set.
    pub fn from_env() -> Option<Self> {
        let vllm_endpoint = env_var_nonempty(env_testing::VLLM_ENDPOINT)?;
        let lmcache_endpoint = env_var_nonempty(env_testing::LMCACHE_ENDPOINT)?;
        Some(ByoeSettings {
            gateway: env_or_default(env_testing::PIXIU_URL, DEFAULT_BYOE_GATEWAY_URL),
            vllm_endpoint,
            lmcache_endpoint,
            model: env_or_default(env_testing::MODEL_NAME, DEFAULT_BYOE_MODEL),
        })
    }
}

/// Chat-style request with a single user message.
pub fn chat_request(model: &str, content: &str) -> Value {
    json!({
        "model": model,
        "messages": [{"role": "user", "content": content}],
    })
}

/// Join a base URL and an absolute path, tolerating a trailing `/` on the base.
pub fn service_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

pub fn chat_completions_url(base: &str) -> String {
    service_url(base, "/v1/chat/completions")
}

/// Client with an overall request timeout
pub fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")
}

/// GET `url`; true only for a 2xx answer.
pub async fn check_service_available(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(err) => {
            tracing::debug!(%url, %err, "service unavailable");
            false
        }
    }
}

/// Check the gateway with a completions-style request.
///
/// Any HTTP answer counts as available; only transport failures do not.
pub async fn check_gateway_available(
    client: &reqwest::Client,
    base: &str,
    model: &str,
    prompt: &str,
) -> bool {
    let url = chat_completions_url(base);
    let request = json!({"model": model, "prompt": prompt});
    match client.post(&url).json(&request).send().await {
        Ok(resp) => resp.status().as_u16() < 600,
        Err(err) => {
            tracing::debug!(%url, %err, "gateway unavailable");
            false
        }
    }
}

/// POST a JSON body and decode a JSON object back, failing on non-2xx.
pub async fn post_json<T: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    body: &T,
) -> Result<Value> {
    let resp = client
        .post(url)
        .json(body)
        .send()
        .await
        .with_context(|| format!("POST {url} failed"))?;
    read_json("POST", url, resp).await
}

/// GET `url` and decode a JSON object, failing on non-2xx.
pub async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?;
    read_json("GET", url, resp).await
}

async fn read_json(method: &str, url: &str, resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .with_context(|| format!("{method} {url}: failed to read body"))?;
    if !status.is_success() {
        bail!("{method} {url}: status {status}: {body}");
    }
    serde_json::from_str(&body)
        .with_context(|| format!("{method} {url}: undecodable response body={body}"))
}

/// Read a numeric counter from a `/stats` document.
pub fn stat_counter(stats: &Value, key: &str) -> Result<u64> {
    let value = stats
        .get(key)
        .ok_or_else(|| anyhow!("{key} missing from stats: {stats}"))?;
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
        .ok_or_else(|| anyhow!("{key} is not numeric: {value}"))
}

/// POST `/reset` on every base URL concurrently.
pub async fn reset_all(client: &reqwest::Client, bases: &[&str]) -> Result<()> {
    let empty = json!({});
    futures::future::try_join_all(bases.iter().map(|base| {
        let url = service_url(base, "/reset");
        let empty = &empty;
        async move { post_json(client, &url, empty).await }
    }))
    .await?;
    Ok(())
}

/// What the routing flow observed: who served the repeated request and the
/// mock counters once the gateway settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingObservation {
    pub second_served_by: String,
    pub tokenize_calls: u64,
    pub lookup_calls: u64,
    pub pin_calls: u64,
    pub engine_b_chat_calls: u64,
}

/// Reset the mocks, send the same chat request twice through the gateway and
/// collect the counters the routing assertions look at.
pub async fn run_routing_flow(
    client: &reqwest::Client,
    endpoints: &MockEndpoints,
    prompt: &str,
) -> Result<RoutingObservation> {
    reset_all(client, &endpoints.mocks()).await?;

    let chat_url = chat_completions_url(&endpoints.gateway);
    let payload = chat_request(MOCK_MODEL, prompt);

    post_json(client, &chat_url, &payload).await?;
    tokio::time::sleep(SECOND_REQUEST_DELAY).await;
    let second = post_json(client, &chat_url, &payload).await?;
    let second_served_by = second["served_by"].as_str().unwrap_or_default().to_string();

    tokio::time::sleep(SETTLE_DELAY).await;
    let controller = get_json(client, &service_url(&endpoints.controller, "/stats")).await?;
    let engine_a = get_json(client, &service_url(&endpoints.engine_a, "/stats")).await?;
    let engine_b = get_json(client, &service_url(&endpoints.engine_b, "/stats")).await?;

    Ok(RoutingObservation {
        second_served_by,
        tokenize_calls: stat_counter(&engine_a, "tokenize_calls")?,
        lookup_calls: stat_counter(&controller, "lookup_calls")?,
        pin_calls: stat_counter(&controller, "pin_calls")?,
        engine_b_chat_calls: stat_counter(&engine_b, "chat_calls")?,
    })
}
