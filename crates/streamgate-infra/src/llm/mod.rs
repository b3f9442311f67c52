//! LLM provider adapter implementations.
//!
//! Contains the concrete implementations of the [`LlmProvider`] trait
//! defined in `streamgate-core` -- AWS Bedrock (managed-inference) and
//! Azure OpenAI (hosted-chat) -- plus [`ConfiguredAdapterFactory`], which
//! constructs the right adapter for a resolved descriptor.

pub mod azure_openai;
pub mod bedrock;

use secrecy::SecretString;

use streamgate_core::llm::factory::AdapterFactory;
use streamgate_core::llm::provider::BoxLlmProvider;
use streamgate_types::config::GatewayConfig;
use streamgate_types::error::GatewayError;
use streamgate_types::llm::{Platform, ProviderDescriptor};

use self::azure_openai::AzureOpenAiProvider;
use self::azure_openai::config::AzureOpenAiConfig;
use self::bedrock::BedrockProvider;
use crate::config::{BEDROCK_REGION_VAR, BEDROCK_TOKEN_VAR};

/// Adapter factory driven by process configuration.
///
/// One fresh adapter is constructed per `open` call; adapters are never
/// pooled or reused across invocations. A required construction parameter
/// missing from the configuration (e.g. the Bedrock region) fails with
/// [`GatewayError::Configuration`] -- and only when that platform is
/// actually selected.
pub struct ConfiguredAdapterFactory {
    config: GatewayConfig,
}

impl ConfiguredAdapterFactory {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

impl AdapterFactory for ConfiguredAdapterFactory {
    fn open(&self, descriptor: &ProviderDescriptor) -> Result<BoxLlmProvider, GatewayError> {
        match descriptor.platform {
            Platform::Bedrock => {
                let region = self.config.bedrock_region.clone().ok_or_else(|| {
                    GatewayError::Configuration(format!(
                        "{BEDROCK_REGION_VAR} is not set (required for managed-inference models)"
                    ))
                })?;
                let token = self.config.bedrock_api_token.clone().ok_or_else(|| {
                    GatewayError::Configuration(format!(
                        "{BEDROCK_TOKEN_VAR} is not set (required for managed-inference models)"
                    ))
                })?;

                let provider = BedrockProvider::new(
                    SecretString::from(token),
                    descriptor.model_id.clone(),
                    region,
                );
                Ok(Box::new(provider))
            }
            Platform::AzureOpenAi => {
                let azure_config =
                    AzureOpenAiConfig::from_gateway_config(&self.config, &descriptor.model_id)?;
                Ok(Box::new(AzureOpenAiProvider::new(azure_config)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamgate_core::llm::provider::LlmProvider;

    fn full_config() -> GatewayConfig {
        GatewayConfig {
            bedrock_region: Some("ap-northeast-1".to_string()),
            bedrock_api_token: Some("bedrock-token".to_string()),
            azure_endpoint: Some("https://example.openai.azure.com".to_string()),
            azure_api_key: Some("azure-key".to_string()),
            ..GatewayConfig::default()
        }
    }

    #[test]
    fn test_open_bedrock_adapter() {
        let factory = ConfiguredAdapterFactory::new(full_config());
        let descriptor = ProviderDescriptor::new(Platform::Bedrock, "us.amazon.nova-micro-v1:0");

        let provider = factory.open(&descriptor).unwrap();
        assert_eq!(provider.name(), "bedrock");
        assert_eq!(provider.platform(), Platform::Bedrock);
        assert_eq!(provider.model(), "us.amazon.nova-micro-v1:0");
    }

    #[test]
    fn test_open_azure_adapter() {
        let factory = ConfiguredAdapterFactory::new(full_config());
        let descriptor = ProviderDescriptor::new(Platform::AzureOpenAi, "gpt-4o");

        let provider = factory.open(&descriptor).unwrap();
        assert_eq!(provider.name(), "azure_openai");
        assert_eq!(provider.platform(), Platform::AzureOpenAi);
        assert_eq!(provider.model(), "gpt-4o");
    }

    #[test]
    fn test_missing_region_fails_only_for_bedrock() {
        let mut config = full_config();
        config.bedrock_region = None;
        let factory = ConfiguredAdapterFactory::new(config);

        let err = factory
            .open(&ProviderDescriptor::new(
                Platform::Bedrock,
                "cohere.command-r-v1:0",
            ))
            .err()
            .unwrap();
        match err {
            GatewayError::Configuration(message) => {
                assert!(message.contains(BEDROCK_REGION_VAR));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }

        // The hosted-chat platform does not need a region.
        let provider = factory
            .open(&ProviderDescriptor::new(Platform::AzureOpenAi, "gpt-4o"))
            .unwrap();
        assert_eq!(provider.name(), "azure_openai");
    }

    #[test]
    fn test_missing_bedrock_token_is_configuration_error() {
        let mut config = full_config();
        config.bedrock_api_token = None;
        let factory = ConfiguredAdapterFactory::new(config);

        let err = factory
            .open(&ProviderDescriptor::new(
                Platform::Bedrock,
                "us.amazon.nova-pro-v1:0",
            ))
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::Configuration(_)));
    }

    #[test]
    fn test_missing_azure_credentials_fail_only_for_azure() {
        let mut config = full_config();
        config.azure_api_key = None;
        let factory = ConfiguredAdapterFactory::new(config);

        let err = factory
            .open(&ProviderDescriptor::new(Platform::AzureOpenAi, "o1-mini"))
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::Configuration(_)));

        let provider = factory
            .open(&ProviderDescriptor::new(
                Platform::Bedrock,
                "us.amazon.nova-lite-v1:0",
            ))
            .unwrap();
        assert_eq!(provider.name(), "bedrock");
    }

    #[test]
    fn test_each_open_constructs_a_fresh_adapter() {
        let factory = ConfiguredAdapterFactory::new(full_config());
        let descriptor = ProviderDescriptor::new(Platform::AzureOpenAi, "gpt-4o");

        let a = factory.open(&descriptor).unwrap();
        let b = factory.open(&descriptor).unwrap();
        assert!(!std::ptr::eq(a.as_ref(), b.as_ref()));
    }
}
