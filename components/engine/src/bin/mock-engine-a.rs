// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use mock_engine::{EngineConfig, cli::EngineArgs};

/// Mock engine A: serves chat completions and a deterministic /tokenize.
/// Defaults to :18091 and mock-llm-a (LLM_A_ADDR, LLM_A_ID).
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().engine.apply(EngineConfig::engine_a_from_env());
    mock_engine::cli::run(config).await
}
