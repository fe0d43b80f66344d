// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Environment variable name constants for centralized management across the workspace
//!
//! ## Organization
//!
//! - **Logging**: Log level and output format
//! - **Controller**: Mock cache controller listener and placement preference
//! - **Engine**: Mock inference engine listeners and identities
//! - **Testing**: Gateway and mock URLs consumed by the integration suites

/// Logging environment variables
pub mod logging {
    /// Log filter directives (e.g., "debug", "mock_controller=trace")
    pub const KVCACHE_MOCK_LOG: &str = "KVCACHE_MOCK_LOG";

    /// Enable JSONL logging format
    pub const KVCACHE_MOCK_LOGGING_JSONL: &str = "KVCACHE_MOCK_LOGGING_JSONL";

    /// Disable ANSI terminal colors in logs
    pub const KVCACHE_MOCK_DISABLE_ANSI_LOGGING: &str = "KVCACHE_MOCK_DISABLE_ANSI_LOGGING";

    /// Use local timezone for logging timestamps (default is UTC)
    pub const KVCACHE_MOCK_LOG_USE_LOCAL_TZ: &str = "KVCACHE_MOCK_LOG_USE_LOCAL_TZ";
}

/// Mock cache controller
pub mod controller {
    /// Listen address, `host:port` or `:port`
    pub const LMCACHE_ADDR: &str = "LMCACHE_ADDR";

    /// Engine that receives the larger synthetic placement size in `/lookup`
    pub const PREFERRED_ENDPOINT_ID: &str = "PREFERRED_ENDPOINT_ID";
}

/// Mock inference engines
pub mod engine {
    pub const LLM_A_ADDR: &str = "LLM_A_ADDR";
    pub const LLM_A_ID: &str = "LLM_A_ID";
    pub const LLM_B_ADDR: &str = "LLM_B_ADDR";
    pub const LLM_B_ID: &str = "LLM_B_ID";
}

/// Integration test configuration
pub mod testing {
    /// Base URL of the gateway under test
    pub const PIXIU_URL: &str = "PIXIU_URL";
    pub const CONTROLLER_URL: &str = "CONTROLLER_URL";
    pub const ENGINE_A_URL: &str = "ENGINE_A_URL";
    pub const ENGINE_B_URL: &str = "ENGINE_B_URL";

    /// Bring-your-own-engine mode: both must be set for the BYOE suite to run
    pub const VLLM_ENDPOINT: &str = "VLLM_ENDPOINT";
    pub const LMCACHE_ENDPOINT: &str = "LMCACHE_ENDPOINT";

    /// Model name sent by the BYOE suite
    pub const MODEL_NAME: &str = "MODEL_NAME";
}
