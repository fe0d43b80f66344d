// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use parking_lot::Mutex;

use crate::config::EngineConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub tokenize_calls: u64,
    pub chat_calls: u64,
}

/// Shared engine state: identity plus counters behind one mutex.
pub struct EngineState {
    config: EngineConfig,
    stats: Mutex<EngineStats>,
}

impl EngineState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            stats: Mutex::new(EngineStats::default()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn engine_id(&self) -> &str {
        &self.config.engine_id
    }

    pub fn snapshot(&self) -> EngineStats {
        *self.stats.lock()
    }

    pub fn reset(&self) {
        *self.stats.lock() = EngineStats::default();
    }

    pub fn record_tokenize(&self) {
        self.stats.lock().tokenize_calls += 1;
    }

    pub fn record_chat(&self) {
        self.stats.lock().chat_calls += 1;
    }
}
