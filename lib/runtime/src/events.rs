// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Event identifiers of the form `<prefix>-<n>`.
//!
//! `n` comes from a single process-wide counter, so identifiers are unique and
//! strictly increasing across every prefix and every service hosted by the
//! process. The counter is not persisted and starts at 1.

use std::sync::atomic::{AtomicU64, Ordering};

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Allocate the next event identifier for `prefix`.
pub fn next_event_id(prefix: &str) -> String {
    let n = EVENT_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{prefix}-{n}")
}

/// Split an event identifier into its prefix and sequence number.
pub fn parse_event_id(event_id: &str) -> Option<(&str, u64)> {
    let (prefix, n) = event_id.rsplit_once('-')?;
    if prefix.is_empty() {
        return None;
    }
    Some((prefix, n.parse().ok()?))
}
