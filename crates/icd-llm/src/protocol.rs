//! Chat completions wire types and response/error decoding.

use serde::{Deserialize, Serialize};

use icd_core::config::GenerationConfig;
use icd_core::errors::GenerationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// System message first, then the user's query.
    pub fn new(config: &GenerationConfig, system_prompt: &str, user_query: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::new("system", system_prompt),
                ChatMessage::new("user", user_query),
            ],
            temperature: Some(config.temperature),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Text of the first choice.
pub fn parse_response(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::ParseError {
            reason: e.to_string(),
        })?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::ParseError {
            reason: "response has no message content".to_string(),
        })
}

/// Map a non-success status and its body to a generation error.
/// 429 is a quota/rate-limit failure; everything else is an API error.
pub fn parse_error(status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    if status == 429 {
        GenerationError::QuotaExceeded { reason: message }
    } else {
        GenerationError::ApiError { status, message }
    }
}

/// Failures worth one more attempt: timeouts, connection trouble, server errors.
pub fn is_transient(error: &GenerationError) -> bool {
    match error {
        GenerationError::Timeout { .. } | GenerationError::Network { .. } => true,
        GenerationError::ApiError { status, .. } => *status >= 500,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let config = GenerationConfig::default();
        let request = ChatRequest::new(&config, "rules and codes", "viral pneumonia");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "rules and codes");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "viral pneumonia");
        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
    }

    #[test]
    fn first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"J12.9 fits."}},{"message":{"content":"other"}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "J12.9 fits.");
    }

    #[test]
    fn missing_content_is_a_parse_error() {
        for body in [r#"{"choices":[]}"#, r#"{"choices":[{"message":{"content":null}}]}"#, "not json"] {
            assert!(matches!(
                parse_response(body),
                Err(GenerationError::ParseError { .. })
            ));
        }
    }

    #[test]
    fn error_bodies() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota"}}"#;
        assert!(matches!(
            parse_error(429, body),
            GenerationError::QuotaExceeded { reason } if reason.contains("quota")
        ));
        assert!(matches!(
            parse_error(401, "Unauthorized"),
            GenerationError::ApiError { status: 401, message } if message == "Unauthorized"
        ));
    }

    #[test]
    fn transient_errors() {
        assert!(is_transient(&GenerationError::Timeout { after_secs: 30 }));
        assert!(is_transient(&GenerationError::ApiError { status: 503, message: String::new() }));
        assert!(!is_transient(&GenerationError::ApiError { status: 400, message: String::new() }));
        assert!(!is_transient(&GenerationError::QuotaExceeded { reason: String::new() }));
    }
}
