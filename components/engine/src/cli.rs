// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry shared by the `mock-engine-a` and `mock-engine-b` binaries.

use std::sync::Arc;

use clap::Args;
use kvcache_mock_runtime::{logging, server::serve_until_shutdown};

use crate::{EngineConfig, EngineState, engine_router};

/// Flags accepted by both engine binaries; each overrides its env variable.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Listen address, `host:port` or `:port`
    #[arg(long)]
    pub addr: Option<String>,

    /// Identity reported as `served_by` and in `/health`
    #[arg(long)]
    pub engine_id: Option<String>,
}

impl EngineArgs {
    pub fn apply(self, mut config: EngineConfig) -> EngineConfig {
        if let Some(addr) = self.addr {
            config = config.with_addr(addr);
        }
        if let Some(engine_id) = self.engine_id {
            config = config.with_engine_id(engine_id);
        }
        config
    }
}

/// Install logging and serve the engine until Ctrl-C.
pub async fn run(config: EngineConfig) -> anyhow::Result<()> {
    logging::init();

    let component = config.component;
    tracing::info!(
        engine_id = %config.engine_id,
        tokenize_enabled = config.tokenize_enabled,
        "[{component}] starting"
    );

    let addr = config.addr.clone();
    let state = Arc::new(EngineState::new(config));
    serve_until_shutdown(component, &addr, engine_router(state))
        .await
        .inspect_err(|e| tracing::error!("[{component}] server failed: {e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = EngineArgs {
            addr: Some("127.0.0.1:0".to_string()),
            engine_id: None,
        };
        let config = args.apply(EngineConfig::engine_b());
        assert_eq!(config.addr, "127.0.0.1:0");
        assert_eq!(config.engine_id, "mock-llm-b");
        assert!(!config.tokenize_enabled);
    }
}
