//! Azure OpenAI provider adapter.
//!
//! Implements [`LlmProvider`] for the hosted-chat platform using
//! [`async_openai`] with its Azure configuration: requests go to a
//! deployment under the resource endpoint and stream back as SSE.

pub mod config;
pub mod streaming;

use async_openai::Client;
use async_openai::config::AzureConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, ChatCompletionStreamOptions,
    CreateChatCompletionRequest,
};

use streamgate_core::llm::provider::{EventStream, LlmProvider};
use streamgate_types::llm::{CompletionRequest, LlmError, MessageRole, Platform};

use self::config::AzureOpenAiConfig;
use self::streaming::map_azure_stream;

/// Azure OpenAI chat-completion provider.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct AzureOpenAiProvider {
    client: Client<AzureConfig>,
    model: String,
}

impl AzureOpenAiProvider {
    /// Create a new Azure OpenAI provider from a configuration.
    pub fn new(config: AzureOpenAiConfig) -> Self {
        let azure_config = AzureConfig::new()
            .with_api_base(&config.endpoint)
            .with_api_key(&config.api_key)
            .with_deployment_id(&config.deployment)
            .with_api_version(&config.api_version);

        Self {
            client: Client::with_config(azure_config),
            model: config.model,
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic
    /// [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            })
            .collect();

        let mut oai_request = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_completion_tokens: request.max_tokens,
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        };

        oai_request.stream = Some(true);
        oai_request.stream_options = Some(ChatCompletionStreamOptions {
            include_usage: Some(true),
            include_obfuscation: None,
        });

        oai_request
    }
}

// AzureOpenAiProvider intentionally does NOT derive Debug to prevent
// accidental exposure of internal state including the API key inside the
// async-openai Client.

impl LlmProvider for AzureOpenAiProvider {
    fn name(&self) -> &str {
        "azure_openai"
    }

    fn platform(&self) -> Platform {
        Platform::AzureOpenAi
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn stream(&self, request: CompletionRequest) -> EventStream {
        let oai_request = self.build_request(&request);
        let client = self.client.clone();

        tracing::debug!(model = %self.model, "Azure OpenAI streaming request");

        Box::pin(async_stream::try_stream! {
            let oai_stream = client
                .chat()
                .create_stream(oai_request)
                .await
                .map_err(map_openai_error)?;

            let mut inner = map_azure_stream(oai_stream);

            use futures_util::StreamExt;
            while let Some(event) = inner.next().await {
                match event {
                    Ok(ev) => yield ev,
                    Err(e) => Err(e)?,
                }
            }
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
pub(crate) fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => {
            if let Some(status) = reqwest_err.status() {
                match status.as_u16() {
                    401 | 403 => LlmError::AuthenticationFailed,
                    429 => LlmError::RateLimited,
                    _ => LlmError::Provider {
                        message: err.to_string(),
                    },
                }
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::StreamError(stream_err) => LlmError::Stream(stream_err.to_string()),
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}
