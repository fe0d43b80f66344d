// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Prompt extraction for `/tokenize`.
//!
//! Clients send either a completions-style `prompt` (a string or a list of
//! strings) or a chat-style `messages` list. Both are normalized to ordered
//! text fragments joined with `\n`. Anything that does not fit is ignored
//! rather than rejected, so a malformed body tokenizes as an empty prompt.
//! Invalid UTF-8 inside the prompt is replaced, not rejected.

use kvcache_mock_runtime::error::first_json_value;
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PromptField {
    Text(String),
    Batch(Vec<Value>),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessagesField {
    List(Vec<Value>),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Default, Deserialize)]
struct TokenizeRequest {
    #[serde(default)]
    prompt: Option<PromptField>,

    #[serde(default)]
    messages: Option<MessagesField>,
}

/// Extract the prompt text from a raw `/tokenize` body.
///
/// Precedence:
/// 1. `prompt` as a string, trimmed;
/// 2. `prompt` as a list, its string items joined with `\n`;
/// 3. `messages` as a list, the string `content` of each object joined with `\n`;
/// 4. otherwise the empty string.
pub fn extract_prompt(body: &[u8]) -> String {
    let Some(Ok(Value::Object(payload))) = first_json_value::<Value>(body) else {
        return String::new();
    };
    let Ok(request) = serde_json::from_value::<TokenizeRequest>(Value::Object(payload)) else {
        return String::new();
    };

    match request.prompt {
        Some(PromptField::Text(text)) => return text.trim().to_string(),
        Some(PromptField::Batch(items)) => {
            return join_fragments(items.iter().filter_map(Value::as_str));
        }
        Some(PromptField::Unsupported(_)) | None => {}
    }

    match request.messages {
        Some(MessagesField::List(messages)) => join_fragments(
            messages
                .iter()
                .filter_map(|message| message.as_object())
                .filter_map(|message| message.get("content"))
                .filter_map(Value::as_str),
        ),
        Some(MessagesField::Unsupported(_)) | None => String::new(),
    }
}

fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments.collect::<Vec<_>>().join("\n")
}
