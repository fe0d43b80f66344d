// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use clap::Parser;
use kvcache_mock_runtime::{logging, server::serve_until_shutdown};
use mock_controller::{COMPONENT_NAME, ControllerConfig, ControllerState, controller_router};

#[derive(Parser)]
#[command(author, version, about = "Mock KV-cache controller", long_about = None)]
struct Args {
    /// Listen address (overrides LMCACHE_ADDR, default :18081)
    #[arg(long)]
    addr: Option<String>,

    /// Engine favoured by /lookup placements (overrides PREFERRED_ENDPOINT_ID, default mock-llm-b)
    #[arg(long)]
    preferred_endpoint: Option<String>,
}

impl Args {
    fn apply(self, mut config: ControllerConfig) -> ControllerConfig {
        if let Some(addr) = self.addr {
            config = config.with_addr(addr);
        }
        if let Some(preferred) = self.preferred_endpoint {
            config = config.with_preferred_endpoint(preferred);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Args::parse().apply(ControllerConfig::from_env());

    tracing::info!(
        preferred_endpoint = %config.preferred_endpoint,
        engine_a = %config.engines.engine_a,
        engine_b = %config.engines.engine_b,
        "[{COMPONENT_NAME}] starting"
    );

    let addr = config.addr.clone();
    let state = Arc::new(ControllerState::new(config));
    serve_until_shutdown(COMPONENT_NAME, &addr, controller_router(state))
        .await
        .inspect_err(|e| tracing::error!("[{COMPONENT_NAME}] server failed: {e:#}"))
}
