//! Process configuration for the gateway.

/// Default Azure OpenAI data-plane API version.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-10-21";

/// Configuration sourced from the process environment.
///
/// All values are optional at load time. A missing value only becomes a
/// configuration error when an invocation selects the platform that needs
/// it -- e.g. the Bedrock region is irrelevant to hosted-chat requests.
///
/// Intentionally does NOT derive Debug or Serialize: the token and API key
/// fields hold credential material until the adapters wrap them.
#[derive(Clone)]
pub struct GatewayConfig {
    /// AWS region for the Bedrock runtime (`BEDROCK_AWS_REGION`).
    pub bedrock_region: Option<String>,
    /// Bedrock bearer token (`AWS_BEARER_TOKEN_BEDROCK`).
    pub bedrock_api_token: Option<String>,
    /// Azure OpenAI resource endpoint (`AZURE_OPENAI_ENDPOINT`).
    pub azure_endpoint: Option<String>,
    /// Azure OpenAI API key (`AZURE_OPENAI_API_KEY`).
    pub azure_api_key: Option<String>,
    /// Azure OpenAI API version (`AZURE_OPENAI_API_VERSION`).
    pub azure_api_version: String,
    /// Deployment name override (`AZURE_OPENAI_DEPLOYMENT`). When unset,
    /// the deployment name is the resolved model identifier.
    pub azure_deployment: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bedrock_region: None,
            bedrock_api_token: None,
            azure_endpoint: None,
            azure_api_key: None,
            azure_api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            azure_deployment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty_except_api_version() {
        let config = GatewayConfig::default();
        assert!(config.bedrock_region.is_none());
        assert!(config.bedrock_api_token.is_none());
        assert!(config.azure_endpoint.is_none());
        assert!(config.azure_api_key.is_none());
        assert!(config.azure_deployment.is_none());
        assert_eq!(config.azure_api_version, DEFAULT_AZURE_API_VERSION);
    }
}
