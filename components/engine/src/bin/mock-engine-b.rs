// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use mock_engine::{EngineConfig, cli::EngineArgs};

/// Mock engine B: serves chat completions, answers /tokenize with 404.
/// Defaults to :18092 and mock-llm-b (LLM_B_ADDR, LLM_B_ID).
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().engine.apply(EngineConfig::engine_b_from_env());
    mock_engine::cli::run(config).await
}
