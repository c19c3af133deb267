//! Provider wire types for `/v1/chat/completions`.

use charla_core::PromptMessage;
use serde::{Deserialize, Serialize};

/// Request body for the chat-completions endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [PromptMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Success response body. We only read `choices[0].message.content`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_temperature() {
        let messages = vec![PromptMessage::user("hola")];
        let req = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            temperature: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("temperature"));
        assert!(json.contains(r#""model":"gpt-4o-mini""#));
    }

    #[test]
    fn test_response_parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"¡Hola!"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "¡Hola!");
    }

    #[test]
    fn test_response_tolerates_missing_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
