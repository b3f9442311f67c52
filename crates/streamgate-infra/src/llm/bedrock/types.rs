//! Bedrock Converse API request/response types.
//!
//! The Converse protocol is model-agnostic: the same JSON body drives
//! Cohere, Llama, and Nova models, with the model identifier carried in
//! the URL path rather than the body. Field names on the wire are
//! camelCase.

use serde::{Deserialize, Serialize};

/// Request body for `POST /model/{modelId}/converse-stream`.
#[derive(Debug, Clone, Serialize)]
pub struct ConverseRequest {
    pub messages: Vec<ConverseMessage>,
    #[serde(rename = "inferenceConfig", skip_serializing_if = "Option::is_none")]
    pub inference_config: Option<InferenceConfig>,
}

/// One conversation message. Content is a list of blocks; this gateway
/// only ever sends text blocks.
#[derive(Debug, Clone, Serialize)]
pub struct ConverseMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    pub text: String,
}

/// Generation settings shared across model families.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "maxTokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Payload of a `contentBlockDelta` frame.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlockDeltaPayload {
    pub delta: ConverseDelta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverseDelta {
    #[serde(default)]
    pub text: Option<String>,
}

/// Payload of a `messageStop` frame.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageStopPayload {
    #[serde(rename = "stopReason")]
    pub stop_reason: String,
}

/// Payload of a `metadata` frame (arrives after `messageStop`).
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataPayload {
    #[serde(default)]
    pub usage: Option<ConverseUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverseUsage {
    #[serde(rename = "inputTokens")]
    pub input_tokens: u32,
    #[serde(rename = "outputTokens")]
    pub output_tokens: u32,
}

/// Payload of an exception frame (`:exception-type` header).
#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionPayload {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converse_request_uses_camel_case_keys() {
        let request = ConverseRequest {
            messages: vec![ConverseMessage {
                role: "user".to_string(),
                content: vec![ContentBlock {
                    text: "Hello".to_string(),
                }],
            }],
            inference_config: Some(InferenceConfig {
                temperature: Some(0.0),
                max_tokens: None,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("inferenceConfig").is_some());
        assert!(json.get("inference_config").is_none());
        assert_eq!(json["messages"][0]["content"][0]["text"], "Hello");
        // model must NOT be in the request body (it's in the URL path)
        assert!(json.get("model").is_none());
        // maxTokens skipped when None
        assert!(json["inferenceConfig"].get("maxTokens").is_none());
    }

    #[test]
    fn test_content_block_delta_payload() {
        let json = r#"{"contentBlockIndex":0,"delta":{"text":"Hi"},"p":"abcdef"}"#;
        let payload: ContentBlockDeltaPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.delta.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_message_stop_payload() {
        let json = r#"{"stopReason":"end_turn"}"#;
        let payload: MessageStopPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.stop_reason, "end_turn");
    }

    #[test]
    fn test_metadata_payload_usage() {
        let json = r#"{"usage":{"inputTokens":11,"outputTokens":42,"totalTokens":53},"metrics":{"latencyMs":812}}"#;
        let payload: MetadataPayload = serde_json::from_str(json).unwrap();
        let usage = payload.usage.unwrap();
        assert_eq!(usage.input_tokens, 11);
        assert_eq!(usage.output_tokens, 42);
    }

    #[test]
    fn test_exception_payload_without_message() {
        let payload: ExceptionPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.message.is_none());
    }
}
