// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

/// Wall-clock milliseconds since the Unix epoch, as reported by `/stats`.
pub fn timestamp_unix_milli() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
