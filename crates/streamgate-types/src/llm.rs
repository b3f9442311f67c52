//! LLM request/response types for Streamgate.
//!
//! These types model the data shapes for provider interactions: the
//! resolved provider descriptor, completion requests, streaming events,
//! usage tracking, and adapter-level errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Backend platform family an alias resolves to.
///
/// `Bedrock` is the managed multi-model inference service; `AzureOpenAi`
/// is the hosted single-vendor chat-completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Bedrock,
    AzureOpenAi,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Bedrock => write!(f, "bedrock"),
            Platform::AzureOpenAi => write!(f, "azure_openai"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bedrock" => Ok(Platform::Bedrock),
            "azure_openai" => Ok(Platform::AzureOpenAi),
            other => Err(format!("invalid platform: '{other}'")),
        }
    }
}

/// Resolved parameters for one model alias: platform, wire-level model
/// identifier, and the fixed generation settings the gateway always uses.
///
/// Descriptors are pure data. Adapter construction (which consults process
/// configuration, e.g. the Bedrock region) is a separate step so that
/// resolution stays side-effect free and testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub platform: Platform,
    pub model_id: String,
    /// Fixed at 0.0 -- the gateway never varies sampling temperature.
    pub temperature: f64,
    /// Always true -- the gateway never returns non-streaming completions.
    pub streaming: bool,
}

impl ProviderDescriptor {
    /// Build a descriptor with the gateway's fixed generation settings.
    pub fn new(platform: Platform, model_id: impl Into<String>) -> Self {
        Self {
            platform,
            model_id: model_id.into(),
            temperature: 0.0,
            streaming: true,
        }
    }
}

/// Request to an LLM provider for a streaming completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub stream: bool,
}

/// Reason why the LLM stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ContentFiltered,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::StopSequence => write!(f, "stop_sequence"),
            StopReason::ContentFiltered => write!(f, "content_filtered"),
        }
    }
}

impl FromStr for StopReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "end_turn" => Ok(StopReason::EndTurn),
            "max_tokens" => Ok(StopReason::MaxTokens),
            "stop_sequence" => Ok(StopReason::StopSequence),
            "content_filtered" => Ok(StopReason::ContentFiltered),
            other => Err(format!("invalid stop reason: '{other}'")),
        }
    }
}

/// Token usage for one completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Events emitted during a streaming LLM response.
///
/// Within one request, adapters yield events in production order and a
/// stream carries at most one terminal (`Done` or an `Err` item).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Connection established with the provider.
    Connected,

    /// A delta of generated text.
    TextDelta { text: String },

    /// Token usage information.
    Usage(Usage),

    /// The message is finishing with a stop reason.
    MessageDelta { stop_reason: StopReason },

    /// The stream has completed successfully.
    Done,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("rate limited")]
    RateLimited,

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
