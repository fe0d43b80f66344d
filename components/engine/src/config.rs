// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use kvcache_mock_config::env_or_default;
use kvcache_mock_config::environment_names::engine as env_engine;

pub const DEFAULT_ENGINE_A_ADDR: &str = ":18091";
pub const DEFAULT_ENGINE_A_ID: &str = "mock-llm-a";
pub const DEFAULT_ENGINE_B_ADDR: &str = ":18092";
pub const DEFAULT_ENGINE_B_ID: &str = "mock-llm-b";

/// Identity and capabilities of one mock engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Listen address, `host:port` or `:port`
    pub addr: String,

    /// Reported as `served_by`, `engine` and `engine_id`
    pub engine_id: String,

    /// Whether `/tokenize` is served or answered with 404
    pub tokenize_enabled: bool,

    /// Log prefix and binary name
    pub component: &'static str,
}

impl EngineConfig {
    pub fn engine_a() -> Self {
        EngineConfig {
            addr: DEFAULT_ENGINE_A_ADDR.to_string(),
            engine_id: DEFAULT_ENGINE_A_ID.to_string(),
            tokenize_enabled: true,
            component: "mock-engine-a",
        }
    }

    pub fn engine_b() -> Self {
        EngineConfig {
            addr: DEFAULT_ENGINE_B_ADDR.to_string(),
            engine_id: DEFAULT_ENGINE_B_ID.to_string(),
            tokenize_enabled: false,
            component: "mock-engine-b",
        }
    }

    /// Engine A with `LLM_A_ADDR` / `LLM_A_ID` applied
    pub fn engine_a_from_env() -> Self {
        let defaults = Self::engine_a();
        EngineConfig {
            addr: env_or_default(env_engine::LLM_A_ADDR, &defaults.addr),
            engine_id: env_or_default(env_engine::LLM_A_ID, &defaults.engine_id),
            ..defaults
        }
    }

    /// Engine B with `LLM_B_ADDR` / `LLM_B_ID` applied
    pub fn engine_b_from_env() -> Self {
        let defaults = Self::engine_b();
        EngineConfig {
            addr: env_or_default(env_engine::LLM_B_ADDR, &defaults.addr),
            engine_id: env_or_default(env_engine::LLM_B_ID, &defaults.engine_id),
            ..defaults
        }
    }

    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    pub fn with_engine_id(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = engine_id.into();
        self
    }
}
