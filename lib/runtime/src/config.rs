// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use kvcache_mock_config::env_is_truthy;
use kvcache_mock_config::environment_names::logging as env_logging;

/// Host used when a listen address only names a port (`:18081`).
const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";

/// Check whether JSONL logging enabled
/// Set the `KVCACHE_MOCK_LOGGING_JSONL` environment variable a truthy value
pub fn jsonl_logging_enabled() -> bool {
    env_is_truthy(env_logging::KVCACHE_MOCK_LOGGING_JSONL)
}

/// Check whether logging with ANSI terminal escape codes and colors is disabled.
pub fn disable_ansi_logging() -> bool {
    env_is_truthy(env_logging::KVCACHE_MOCK_DISABLE_ANSI_LOGGING)
}

/// Check whether to use local timezone for logging timestamps (default is UTC)
pub fn use_local_timezone() -> bool {
    env_is_truthy(env_logging::KVCACHE_MOCK_LOG_USE_LOCAL_TZ)
}

/// Turn a listen address into something [`tokio::net::TcpListener::bind`] accepts.
///
/// The mocks are configured with `:port` addresses, which mean "every
/// interface". Full `host:port` addresses pass through untouched.
pub fn normalize_listen_addr(addr: &str) -> String {
    let addr = addr.trim();
    match addr.strip_prefix(':') {
        Some(port) => format!("{DEFAULT_LISTEN_HOST}:{port}"),
        None => addr.to_string(),
    }
}
