// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;

/// Call counters recorded by the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerStats {
    pub lookup_calls: u64,
    pub lookup_success: u64,
    pub lookup_failure: u64,
    pub pin_calls: u64,
    pub compress_calls: u64,
    pub evict_calls: u64,
}

/// Token-sequence operations that only bump a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOp {
    Pin,
    Compress,
    Evict,
}

impl TokenOp {
    /// Operation name, also used as the event id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenOp::Pin => "pin",
            TokenOp::Compress => "compress",
            TokenOp::Evict => "evict",
        }
    }
}

/// Shared controller state: configuration plus counters behind one mutex.
///
/// Note: Don't implement Clone for this, put it in an Arc instead.
pub struct ControllerState {
    config: ControllerConfig,
    stats: Mutex<ControllerStats>,
}

impl ControllerState {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            stats: Mutex::new(ControllerStats::default()),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> ControllerStats {
        *self.stats.lock()
    }

    pub fn reset(&self) {
        *self.stats.lock() = ControllerStats::default();
    }

    pub fn record_lookup_success(&self) {
        let mut stats = self.stats.lock();
        stats.lookup_calls += 1;
        stats.lookup_success += 1;
    }

    pub fn record_lookup_failure(&self) {
        self.stats.lock().lookup_failure += 1;
    }

    pub fn record_token_op(&self, op: TokenOp) {
        let mut stats = self.stats.lock();
        match op {
            TokenOp::Pin => stats.pin_calls += 1,
            TokenOp::Compress => stats.compress_calls += 1,
            TokenOp::Evict => stats.evict_calls += 1,
        }
    }
}
