// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Runtime plumbing shared by the mock controller and the mock engines.
//!
//! - [`server`]: the HTTP accept loop with a bounded header read timeout and
//!   cancellation-driven shutdown.
//! - [`error`]: the JSON error taxonomy every mock endpoint answers with.
//! - [`events`]: process-wide event identifiers.
//! - [`logging`]: `tracing` subscriber setup.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod protocols;
pub mod server;
pub mod utils;

pub use error::ApiError;
pub use events::next_event_id;
pub use server::HttpServer;
pub use tokio_util::sync::CancellationToken;
