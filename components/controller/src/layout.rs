// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Static placement layouts returned by `/lookup`.
//!
//! The layout maps each engine to `{"0": <tier>, "1": <size>}`. Sizes are
//! synthetic: the preferred engine always gets `tokens + 3` and the other one
//! `max(tokens / 2, 1)`, so a gateway that picks the largest placement always
//! lands on the preferred engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Storage tier reported for engine A
pub const ENGINE_A_TIER: &str = "ram-a";

/// Storage tier reported for engine B
pub const ENGINE_B_TIER: &str = "ram-b";

/// Engine identity -> placement
pub type Layout = BTreeMap<String, Placement>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "0")]
    pub tier: String,

    #[serde(rename = "1")]
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineIds {
    pub engine_a: String,
    pub engine_b: String,
}

/// Token count used for placement sizing; never zero.
pub fn placement_token_count(num_tokens: usize) -> usize {
    num_tokens.max(1)
}

/// Build the two-engine layout for `num_tokens` tokens.
///
/// Engine A is favoured only when it is the preferred endpoint; any other
/// preference, including an unknown engine, favours engine B.
pub fn build_layout(num_tokens: usize, preferred: &str, engines: &EngineIds) -> Layout {
    let token_count = placement_token_count(num_tokens);
    let primary = token_count + 3;
    let secondary = (token_count / 2).max(1);

    let (size_a, size_b) = if preferred == engines.engine_a {
        (primary, secondary)
    } else {
        (secondary, primary)
    };

    Layout::from([
        (
            engines.engine_a.clone(),
            Placement {
                tier: ENGINE_A_TIER.to_string(),
                size: size_a,
            },
        ),
        (
            engines.engine_b.clone(),
            Placement {
                tier: ENGINE_B_TIER.to_string(),
                size: size_b,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn engines() -> EngineIds {
        EngineIds {
            engine_a: "mock-llm-a".to_string(),
            engine_b: "mock-llm-b".to_string(),
        }
    }

    #[test]
    fn test_layout_wire_format() {
        let layout = build_layout(3, "mock-llm-b", &engines());
        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            json!({
                "mock-llm-a": {"0": "ram-a", "1": 1},
                "mock-llm-b": {"0": "ram-b", "1": 6},
            })
        );
    }

    #[rstest]
    #[case(0, 4, 1)]
    #[case(1, 4, 1)]
    #[case(2, 5, 1)]
    #[case(3, 6, 1)]
    #[case(4, 7, 2)]
    #[case(17, 20, 8)]
    fn test_preferred_engine_gets_larger_size(
        #[case] num_tokens: usize,
        #[case] primary: usize,
        #[case] secondary: usize,
    ) {
        let layout = build_layout(num_tokens, "mock-llm-b", &engines());
        assert_eq!(layout["mock-llm-b"].size, primary);
        assert_eq!(layout["mock-llm-a"].size, secondary);
        assert!(layout["mock-llm-b"].size > layout["mock-llm-a"].size);

        let layout = build_layout(num_tokens, "mock-llm-a", &engines());
        assert_eq!(layout["mock-llm-a"].size, primary);
        assert_eq!(layout["mock-llm-b"].size, secondary);
    }

    #[test]
    fn test_unknown_preference_favours_engine_b() {
        let layout = build_layout(10, "some-other-engine", &engines());
        assert_eq!(layout["mock-llm-b"].size, 13);
        assert_eq!(layout["mock-llm-a"].size, 5);
    }

    #[test]
    fn test_custom_engine_ids_are_layout_keys() {
        let engines = EngineIds {
            engine_a: "gpu-0".to_string(),
            engine_b: "gpu-1".to_string(),
        };
        let layout = build_layout(2, "gpu-0", &engines);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout["gpu-0"].tier, ENGINE_A_TIER);
        assert_eq!(layout["gpu-0"].size, 5);
        assert_eq!(layout["gpu-1"].size, 1);
    }
}
