//! Chat message types for conversation history and the upstream wire format.

use serde::{Deserialize, Serialize};

/// A single client-held message in the conversation history.
///
/// The client owns these: the server only reads, truncates, and forwards
/// them. The `role` is kept as a raw string on purpose: clients send
/// arbitrary values (`"bot"`, missing, typos) and normalization happens in
/// [`crate::ContextBuilder`], not at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Raw role as sent by the client. Anything other than `"assistant"`
    /// normalizes to user.
    #[serde(default)]
    pub role: String,

    /// Message content.
    #[serde(default)]
    pub content: String,

    /// Unix timestamp (milliseconds) when the message was created, if the
    /// client bothered to send one.
    #[serde(default, alias = "ts", skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
}

impl Turn {
    /// Create a user turn stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            timestamp_ms: Some(chrono::Utc::now().timestamp_millis()),
        }
    }

    /// Create an assistant turn stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            timestamp_ms: Some(chrono::Utc::now().timestamp_millis()),
        }
    }
}

/// Role of a message in the upstream prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// System message (persona/behavior instructions).
    System,
    /// User message (question).
    User,
    /// Assistant message (prior answer).
    Assistant,
}

/// A message in the provider's chat-completions wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Role of this message.
    pub role: PromptRole,
    /// Message content.
    pub content: String,
}

impl PromptMessage {
    /// Create a new prompt message.
    pub fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(PromptRole::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(PromptRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(PromptRole::Assistant, content)
    }
}
