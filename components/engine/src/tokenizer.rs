// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Deterministic pseudo-tokenizer.
//!
//! Each whitespace-separated word becomes one token:
//! `(sum of its char code points mod 997) + word index + 1`. An empty prompt
//! still yields one token, `0`, so callers never see an empty sequence.

pub type Token = u32;

/// Context length reported by `/tokenize`
pub const MAX_MODEL_LEN: usize = 8192;

const WORD_HASH_MODULUS: u64 = 997;

/// Token emitted for an empty or whitespace-only prompt
pub const EMPTY_PROMPT_TOKEN: Token = 0;

pub fn tokenize_prompt(prompt: &str) -> Vec<Token> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return vec![EMPTY_PROMPT_TOKEN];
    }

    prompt
        .split_whitespace()
        .enumerate()
        .map(|(idx, word)| {
            let sum: u64 = word.chars().map(u64::from).sum();
            (sum % WORD_HASH_MODULUS) as Token + idx as Token + 1
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // "hi" = 104 + 105 = 209
        assert_eq!(tokenize_prompt("hi"), vec![210]);
        // "a" = 97, "b" = 98 at index 1
        assert_eq!(tokenize_prompt("a b"), vec![98, 100]);
        // "zzzzzzzzzz" = 1220, 1220 % 997 = 223
        assert_eq!(tokenize_prompt("zzzzzzzzzz"), vec![224]);
    }

    #[test]
    fn test_empty_prompts() {
        assert_eq!(tokenize_prompt(""), vec![0]);
        assert_eq!(tokenize_prompt("   \n\t "), vec![0]);
    }

    #[test]
    fn test_deterministic_and_whitespace_insensitive() {
        let prompt = "please route same prompt for kvcache test";
        let tokens = tokenize_prompt(prompt);
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens, tokenize_prompt(prompt));
        assert_eq!(
            tokens,
            tokenize_prompt("  please\troute same\n\nprompt for   kvcache test ")
        );
    }

    #[test]
    fn test_position_changes_token() {
        let tokens = tokenize_prompt("same same same");
        assert_eq!(tokens[1], tokens[0] + 1);
        assert_eq!(tokens[2], tokens[0] + 2);
    }

    #[test]
    fn test_non_ascii_words() {
        // 'é' = 233, '中' = 20013 -> 20013 % 997 = 73
        assert_eq!(tokenize_prompt("é 中"), vec![234, 75]);
    }
}
