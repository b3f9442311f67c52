//! Chat request and session-turn types for Streamgate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question used when an invocation arrives with no payload at all.
pub const DEFAULT_QUESTION: &str = "あなたは誰？";

/// Model alias used when an invocation arrives with no payload at all.
///
/// Deliberately not a known alias: it falls through the registry to the
/// default hosted-chat model.
pub const DEFAULT_MODEL_ALIAS: &str = "gpt";

/// Parsed inbound invocation payload.
///
/// `model` and `session_id` are optional; absence is handled downstream
/// (registry fallback, fresh session id). Immutable after entry parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// The all-or-nothing fallback used when the payload is entirely absent.
    ///
    /// The session id is left unset here; callers generate one via
    /// [`new_session_id`] so the generation point is explicit.
    pub fn fallback() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_string(),
            model: Some(DEFAULT_MODEL_ALIAS.to_string()),
            session_id: None,
        }
    }
}

/// Generate a fresh time-ordered session identifier (UUID v7).
pub fn new_session_id() -> String {
    Uuid::now_v7().to_string()
}

/// One completed exchange in a session's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_full_payload() {
        let json = r#"{"question":"hello","model":"nova-micro","sessionId":"abc"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.question, "hello");
        assert_eq!(request.model.as_deref(), Some("nova-micro"));
        assert_eq!(request.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_chat_request_optional_fields_absent() {
        let json = r#"{"question":"hello"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.question, "hello");
        assert!(request.model.is_none());
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_chat_request_session_id_is_camel_case_on_the_wire() {
        let request = ChatRequest {
            question: "hi".to_string(),
            model: None,
            session_id: Some("abc".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"sessionId\":\"abc\""));
        assert!(!json.contains("session_id"));
    }

    #[test]
    fn test_fallback_request() {
        let request = ChatRequest::fallback();
        assert_eq!(request.question, DEFAULT_QUESTION);
        assert_eq!(request.model.as_deref(), Some(DEFAULT_MODEL_ALIAS));
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_new_session_ids_are_unique_v7() {
        let a = new_session_id();
        let b = new_session_id();
        assert_ne!(a, b);
        let parsed = Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }
}
