// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Configuration utilities shared by the mock services and the test harness.
//!
//! Every setting in this workspace comes from an environment variable with a
//! fallback. A variable that is unset, or set to an empty or whitespace-only
//! value, is treated as absent.

pub mod environment_names;

/// Check if a string is truthy.
///
/// Truthy values: "1", "true", "on", "yes" (case-insensitive)
pub fn is_truthy(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "on" | "yes")
}

/// Check if an environment variable is truthy.
///
/// Returns `false` if the environment variable is not set.
pub fn env_is_truthy(env: &str) -> bool {
    env_var_nonempty(env).is_some_and(|val| is_truthy(&val))
}

/// Read an environment variable, treating blank values as unset.
///
/// The returned value is not trimmed; only the emptiness check ignores
/// surrounding whitespace.
pub fn env_var_nonempty(env: &str) -> Option<String> {
    match std::env::var(env) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

/// Read an environment variable or fall back to `default` when it is unset or blank.
///
/// ```ignore
/// let addr = env_or_default(LMCACHE_ADDR, ":18081");
/// ```
pub fn env_or_default(env: &str, default: &str) -> String {
    env_var_nonempty(env).unwrap_or_else(|| default.to_string())
}
