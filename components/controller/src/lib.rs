// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Mock KV-cache controller.
//!
//! Stands in for the cache controller a cache-aware gateway consults before
//! routing. It records how often each operation was called and answers
//! `/lookup` with a static placement that always favours the configured
//! preferred engine. No cache state is modeled.
//!
//! Routes:
//! - `GET /health`, `GET /stats`
//! - `POST /reset`
//! - `POST /lookup`, `POST /pin`, `POST /compress`, `POST /evict` with `{"tokens": [..]}`

pub mod config;
pub mod layout;
pub mod protocols;
pub mod service;
pub mod state;

pub use config::ControllerConfig;
pub use service::controller_router;
pub use state::{ControllerState, ControllerStats, TokenOp};

/// Component name reported by `/health` and used as the log prefix
pub const COMPONENT_NAME: &str = "mock-controller";
