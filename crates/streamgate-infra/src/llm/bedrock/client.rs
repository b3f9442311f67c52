//! BedrockProvider -- concrete [`LlmProvider`] implementation for the AWS
//! Bedrock Runtime Converse API.
//!
//! Sends requests to `converse-stream` using Bearer token authentication
//! (a long-term Bedrock API key). The model identifier goes in the URL
//! path; the body is the model-agnostic Converse shape, so one adapter
//! serves every managed-inference model family.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and never appears
//! in `Debug` output.

use std::time::Duration;

use secrecy::SecretString;

use streamgate_core::llm::provider::{EventStream, LlmProvider};
use streamgate_types::llm::{CompletionRequest, Platform};

use super::streaming::create_converse_stream;
use super::types::{ContentBlock, ConverseMessage, ConverseRequest, InferenceConfig};

/// AWS Bedrock Converse provider.
pub struct BedrockProvider {
    client: reqwest::Client,
    bearer_token: SecretString,
    region: String,
    model_id: String,
}

impl BedrockProvider {
    /// Create a new Bedrock provider.
    ///
    /// # Arguments
    ///
    /// * `bearer_token` - Bedrock API key used as the Bearer token.
    /// * `model_id` - Fully qualified model or inference-profile id
    ///   (e.g., "us.amazon.nova-micro-v1:0").
    /// * `region` - AWS region (e.g., "ap-northeast-1").
    pub fn new(bearer_token: SecretString, model_id: String, region: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            bearer_token,
            region,
            model_id,
        }
    }

    /// Full Converse streaming URL for this provider's model.
    fn url(&self) -> String {
        format!(
            "https://bedrock-runtime.{}.amazonaws.com/model/{}/converse-stream",
            self.region, self.model_id
        )
    }

    /// Convert a generic [`CompletionRequest`] into the Converse shape.
    fn to_converse_request(&self, request: &CompletionRequest) -> ConverseRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| ConverseMessage {
                role: m.role.to_string(),
                content: vec![ContentBlock {
                    text: m.content.clone(),
                }],
            })
            .collect();

        let inference_config =
            if request.temperature.is_some() || request.max_tokens.is_some() {
                Some(InferenceConfig {
                    temperature: request.temperature.map(|t| t as f32),
                    max_tokens: request.max_tokens,
                })
            } else {
                None
            };

        ConverseRequest {
            messages,
            inference_config,
        }
    }
}

// BedrockProvider intentionally does NOT derive Debug to prevent
// accidental exposure of the bearer token.

impl LlmProvider for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    fn platform(&self) -> Platform {
        Platform::Bedrock
    }

    fn model(&self) -> &str {
        &self.model_id
    }

    fn stream(&self, request: CompletionRequest) -> EventStream {
        let body = self.to_converse_request(&request);
        let url = self.url();

        tracing::debug!(url = %url, model_id = %self.model_id, region = %self.region, "Bedrock converse-stream request");

        create_converse_stream(&self.client, &url, body, &self.bearer_token)
    }
}
