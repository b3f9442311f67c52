//! Configuration for the Azure OpenAI provider.

use streamgate_types::config::GatewayConfig;
use streamgate_types::error::GatewayError;

use crate::config::{AZURE_API_KEY_VAR, AZURE_ENDPOINT_VAR};

/// Construction parameters for an [`super::AzureOpenAiProvider`].
pub struct AzureOpenAiConfig {
    /// Azure resource endpoint (e.g., "https://my-resource.openai.azure.com").
    pub endpoint: String,
    /// API key for the resource.
    pub api_key: String,
    /// Deployment name requests are routed to.
    pub deployment: String,
    /// Data-plane API version.
    pub api_version: String,
    /// Model identifier, for diagnostics and history.
    pub model: String,
}

impl AzureOpenAiConfig {
    /// Build the provider configuration for one resolved model.
    ///
    /// The deployment name defaults to the model identifier unless the
    /// process configuration overrides it. Endpoint and API key are
    /// required; either missing is a configuration error, surfaced only
    /// when the hosted-chat platform is actually selected.
    pub fn from_gateway_config(
        config: &GatewayConfig,
        model_id: &str,
    ) -> Result<Self, GatewayError> {
        let endpoint = config.azure_endpoint.clone().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "{AZURE_ENDPOINT_VAR} is not set (required for hosted-chat models)"
            ))
        })?;
        let api_key = config.azure_api_key.clone().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "{AZURE_API_KEY_VAR} is not set (required for hosted-chat models)"
            ))
        })?;

        Ok(Self {
            endpoint,
            api_key,
            deployment: config
                .azure_deployment
                .clone()
                .unwrap_or_else(|| model_id.to_string()),
            api_version: config.azure_api_version.clone(),
            model: model_id.to_string(),
        })
    }
}
