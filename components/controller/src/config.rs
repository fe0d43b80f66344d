// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use kvcache_mock_config::env_or_default;
use kvcache_mock_config::environment_names::{controller as env_controller, engine as env_engine};

use crate::layout::EngineIds;

pub const DEFAULT_ADDR: &str = ":18081";
pub const DEFAULT_PREFERRED_ENDPOINT: &str = "mock-llm-b";
pub const DEFAULT_ENGINE_A_ID: &str = "mock-llm-a";
pub const DEFAULT_ENGINE_B_ID: &str = "mock-llm-b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Listen address, `host:port` or `:port`
    pub addr: String,

    /// Engine that receives the larger synthetic size in `/lookup` layouts
    pub preferred_endpoint: String,

    /// Engine identities used as layout keys
    pub engines: EngineIds,
}

impl ControllerConfig {
    /// Read `LMCACHE_ADDR`, `PREFERRED_ENDPOINT_ID`, `LLM_A_ID` and `LLM_B_ID`.
    pub fn from_env() -> Self {
        ControllerConfig {
            addr: env_or_default(env_controller::LMCACHE_ADDR, DEFAULT_ADDR),
            preferred_endpoint: env_or_default(
                env_controller::PREFERRED_ENDPOINT_ID,
                DEFAULT_PREFERRED_ENDPOINT,
            ),
            engines: EngineIds {
                engine_a: env_or_default(env_engine::LLM_A_ID, DEFAULT_ENGINE_A_ID),
                engine_b: env_or_default(env_engine::LLM_B_ID, DEFAULT_ENGINE_B_ID),
            },
        }
    }

    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    pub fn with_preferred_endpoint(mut self, preferred: impl Into<String>) -> Self {
        self.preferred_endpoint = preferred.into();
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            addr: DEFAULT_ADDR.to_string(),
            preferred_endpoint: DEFAULT_PREFERRED_ENDPOINT.to_string(),
            engines: EngineIds {
                engine_a: DEFAULT_ENGINE_A_ID.to_string(),
                engine_b: DEFAULT_ENGINE_B_ID.to_string(),
            },
        }
    }
}
