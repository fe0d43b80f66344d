// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Mock inference engines.
//!
//! Two engines share one implementation and differ only in their
//! [`EngineConfig`]: engine A (`mock-llm-a`) exposes a deterministic
//! `/tokenize`, engine B (`mock-llm-b`) answers `/tokenize` with 404. Both
//! answer `/v1/chat/completions` with a canned completion naming the engine
//! that served it, which is how routing tests observe the gateway's choice.

pub mod cli;
pub mod config;
pub mod prompt;
pub mod protocols;
pub mod service;
pub mod state;
pub mod tokenizer;

pub use config::EngineConfig;
pub use service::engine_router;
pub use state::{EngineState, EngineStats};
