// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::state::ControllerStats;

/// Body of `/lookup`, `/pin`, `/compress` and `/evict`.
///
/// Missing and `null` token lists are both accepted and count as empty.
/// `null` elements are kept and counted like any other token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensRequest {
    #[serde(default)]
    pub tokens: Option<Vec<Option<i64>>>,
}

impl TokensRequest {
    pub fn num_tokens(&self) -> usize {
        self.tokens.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub event_id: String,
    pub layout_info: Layout,
}

/// Response of `/pin`, `/compress` and `/evict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEventResponse {
    pub event_id: String,
    pub num_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub component: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: ControllerStats,
    pub preferred_endpoint: String,
    pub timestamp_unix_milli: i64,
}
