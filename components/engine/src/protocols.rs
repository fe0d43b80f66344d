// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use kvcache_mock_runtime::error::first_json_value;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Model reported when the request names none
pub const DEFAULT_MODEL: &str = "mock-model";

/// Usage figures reported for every completion
pub const PROMPT_TOKENS: u32 = 8;
pub const COMPLETION_TOKENS: u32 = 8;

/// The parts of an OpenAI chat-completion request the mock looks at.
///
/// `messages` and `prompt` are accepted but not interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(default)]
    pub model: Option<String>,
}

impl ChatCompletionRequest {
    /// Decode leniently: an unreadable body is an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        first_json_value::<Option<Self>>(body)
            .and_then(Result::ok)
            .flatten()
            .unwrap_or_default()
    }

    pub fn model_or_default(&self) -> String {
        match self.model.as_deref() {
            Some(model) if !model.is_empty() => model.to_string(),
            _ => DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub model: String,
    pub served_by: String,
    pub choices: Vec<ChatChoice>,
    pub usage: Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Default for Usage {
    fn default() -> Self {
        Usage {
            prompt_tokens: PROMPT_TOKENS,
            completion_tokens: COMPLETION_TOKENS,
            total_tokens: PROMPT_TOKENS + COMPLETION_TOKENS,
        }
    }
}

impl ChatCompletionResponse {
    /// Canned single-choice completion attributed to `engine_id`.
    pub fn canned(id: String, model: String, engine_id: &str) -> Self {
        ChatCompletionResponse {
            id,
            object: "chat.completion".to_string(),
            model,
            served_by: engine_id.to_string(),
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: format!("mock response from {engine_id}"),
                },
            }],
            usage: Usage::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub count: usize,
    pub tokens: Vec<Token>,
    pub max_model_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub engine: String,
    pub tokenize_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Only reported by engines that serve `/tokenize`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenize_calls: Option<u64>,
    pub chat_calls: u64,
    pub engine_id: String,
    pub timestamp_unix_milli: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_defaults() {
        assert_eq!(
            ChatCompletionRequest::from_body(br#"{"model": "x"}"#).model_or_default(),
            "x"
        );
        assert_eq!(
            ChatCompletionRequest::from_body(br#"{"model": ""}"#).model_or_default(),
            DEFAULT_MODEL
        );
        assert_eq!(
            ChatCompletionRequest::from_body(br#"{"messages": []}"#).model_or_default(),
            DEFAULT_MODEL
        );
        assert_eq!(
            ChatCompletionRequest::from_body(b"garbage").model_or_default(),
            DEFAULT_MODEL
        );
        assert_eq!(
            ChatCompletionRequest::from_body(b"").model_or_default(),
            DEFAULT_MODEL
        );
        assert_eq!(
            ChatCompletionRequest::from_body(b"{\"model\": \"q\xffx\"}").model_or_default(),
            "q\u{FFFD}x"
        );
    }

    #[test]
    fn test_canned_response() {
        let resp = ChatCompletionResponse::canned(
            "chatcmpl-1".to_string(),
            "x".to_string(),
            "mock-llm-a",
        );
        assert_eq!(resp.served_by, "mock-llm-a");
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.choices[0].message.content, "mock response from mock-llm-a");
        assert_eq!(resp.usage.total_tokens, 16);
    }
}
