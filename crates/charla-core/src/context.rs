//! Conversation window assembly.
//!
//! The server keeps no session state: the client resends its transcript on
//! every request, and [`ContextBuilder`] decides which of those turns make it
//! into the upstream prompt. The rules are small but load-bearing:
//!
//! - only the most recent `window_turns` turns are kept, in original order;
//! - roles normalize to exactly `user` or `assistant`;
//! - per-message content is capped by truncation, never rejection;
//! - a client that already appended the pending question to its own history
//!   must not cause the question to appear twice.

use crate::chat::{PromptMessage, Turn};
use crate::error::CoreError;
use crate::text::cap_chars;

/// Tunables for prompt assembly.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Maximum number of history turns resent upstream. The source widget
    /// iterations wavered between 12 and 30; we fix 12.
    pub window_turns: usize,

    /// Per-turn content cap (characters) for history entries.
    pub history_char_cap: usize,

    /// Content cap (characters) for the live question.
    pub question_char_cap: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            window_turns: 12,
            history_char_cap: 2000,
            question_char_cap: 4000,
        }
    }
}

impl ContextConfig {
    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.window_turns == 0 {
            return Err(CoreError::InvalidConfig(
                "window_turns must be at least 1".to_string(),
            ));
        }
        if self.history_char_cap == 0 || self.question_char_cap == 0 {
            return Err(CoreError::InvalidConfig(
                "content caps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds the exact message list submitted upstream.
///
/// Pure and total: `build` never fails, never mutates its inputs, and holds
/// no state between calls.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    config: ContextConfig,
}

impl ContextBuilder {
    /// Create a builder with a validated configuration.
    pub fn new(config: ContextConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Assemble the upstream prompt for one request.
    ///
    /// The output always starts with exactly one system message and ends
    /// with exactly one user message carrying the live question. History is
    /// truncated to the window *first*, then de-duplicated against the
    /// trailing entry (the source iterations disagree on the order; this one
    /// is fixed here).
    pub fn build(
        &self,
        system_prompt: &str,
        question: &str,
        history: &[Turn],
    ) -> Vec<PromptMessage> {
        let window = if history.len() > self.config.window_turns {
            &history[history.len() - self.config.window_turns..]
        } else {
            history
        };

        // Drop turns that carry nothing after trimming.
        let mut kept: Vec<&Turn> = window
            .iter()
            .filter(|t| !t.content.trim().is_empty())
            .collect();

        // De-dup: a client that tracks its own transcript appends the
        // pending question before calling us. Reuse that trailing entry
        // instead of sending the question twice.
        if let Some(last) = kept.last() {
            if last.role != "assistant" && last.content == question {
                kept.pop();
            }
        }

        let mut messages = Vec::with_capacity(kept.len() + 2);
        messages.push(PromptMessage::system(system_prompt));
        for turn in kept {
            let msg = if turn.role == "assistant" {
                PromptMessage::assistant(cap_chars(&turn.content, self.config.history_char_cap))
            } else {
                PromptMessage::user(cap_chars(&turn.content, self.config.history_char_cap))
            };
            messages.push(msg);
        }
        messages.push(PromptMessage::user(cap_chars(
            question,
            self.config.question_char_cap,
        )));

        messages
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            config: ContextConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::PromptRole;

    fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    fn turn(role: &str, content: &str) -> Turn {
        Turn {
            role: role.to_string(),
            content: content.to_string(),
            timestamp_ms: None,
        }
    }

    #[test]
    fn test_empty_history_yields_system_then_question() {
        let msgs = builder().build("sys", "hello", &[]);
        assert_eq!(
            msgs,
            vec![PromptMessage::system("sys"), PromptMessage::user("hello")]
        );
    }

    #[test]
    fn test_history_interleaves_between_system_and_question() {
        let history = vec![turn("user", "2+2?"), turn("assistant", "4")];
        let msgs = builder().build("sys", "and 3+3?", &history);
        assert_eq!(
            msgs,
            vec![
                PromptMessage::system("sys"),
                PromptMessage::user("2+2?"),
                PromptMessage::assistant("4"),
                PromptMessage::user("and 3+3?"),
            ]
        );
    }

    #[test]
    fn test_window_keeps_exactly_last_n_in_order() {
        let history: Vec<Turn> = (0..20).map(|i| turn("user", &format!("q{i}"))).collect();
        let msgs = builder().build("sys", "latest", &history);

        // system + 12 history turns + live question
        assert_eq!(msgs.len(), 14);
        assert_eq!(msgs[1].content, "q8");
        assert_eq!(msgs[12].content, "q19");
        for (i, msg) in msgs[1..13].iter().enumerate() {
            assert_eq!(msg.content, format!("q{}", i + 8));
        }
    }

    #[test]
    fn test_trailing_question_not_duplicated() {
        let history = vec![
            turn("assistant", "4"),
            turn("user", "and 3+3?"),
        ];
        let msgs = builder().build("sys", "and 3+3?", &history);
        assert_eq!(
            msgs,
            vec![
                PromptMessage::system("sys"),
                PromptMessage::assistant("4"),
                PromptMessage::user("and 3+3?"),
            ]
        );
    }

    #[test]
    fn test_dedup_only_applies_to_trailing_user_turn() {
        // An assistant echo of the question is not a duplicate.
        let history = vec![turn("assistant", "ping")];
        let msgs = builder().build("sys", "ping", &history);
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].role, PromptRole::Assistant);
        assert_eq!(msgs[2], PromptMessage::user("ping"));
    }

    #[test]
    fn test_dedup_runs_after_window_truncation() {
        // The matching user turn sits outside the window once 12 newer turns
        // exist, so nothing is de-duplicated.
        let mut history = vec![turn("user", "old question")];
        history.extend((0..12).map(|i| turn("assistant", &format!("a{i}"))));
        let msgs = builder().build("sys", "old question", &history);

        // system + 12 assistant turns + question
        assert_eq!(msgs.len(), 14);
        assert_eq!(msgs[13], PromptMessage::user("old question"));
    }

    #[test]
    fn test_unknown_roles_coerce_to_user() {
        let history = vec![turn("bot", "beep"), turn("", "boop"), turn("assistant", "ok")];
        let msgs = builder().build("sys", "next", &history);
        assert_eq!(msgs[1].role, PromptRole::User);
        assert_eq!(msgs[2].role, PromptRole::User);
        assert_eq!(msgs[3].role, PromptRole::Assistant);
    }

    #[test]
    fn test_role_matching_is_exact() {
        // "Assistant" with a capital A is not "assistant".
        let history = vec![turn("Assistant", "hm")];
        let msgs = builder().build("sys", "next", &history);
        assert_eq!(msgs[1].role, PromptRole::User);
    }

    #[test]
    fn test_whitespace_only_turns_dropped() {
        let history = vec![turn("user", "   \n\t "), turn("assistant", "real")];
        let msgs = builder().build("sys", "next", &history);
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].content, "real");
    }

    #[test]
    fn test_history_content_capped_at_2000_chars() {
        let history = vec![turn("user", &"x".repeat(2005))];
        let msgs = builder().build("sys", "next", &history);
        assert_eq!(msgs[1].content.chars().count(), 2000);
    }

    #[test]
    fn test_question_capped_at_4000_chars() {
        let long = "q".repeat(4321);
        let msgs = builder().build("sys", &long, &[]);
        assert_eq!(msgs[1].content.chars().count(), 4000);
    }

    #[test]
    fn test_rejects_zero_window() {
        let config = ContextConfig {
            window_turns: 0,
            ..ContextConfig::default()
        };
        assert!(ContextBuilder::new(config).is_err());
    }
}
