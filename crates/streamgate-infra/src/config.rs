//! Environment-based configuration loader.
//!
//! All gateway configuration comes from process environment variables.
//! Loading never fails: missing values stay `None` and only surface as a
//! configuration error when an invocation selects a platform that needs
//! them.

use streamgate_types::config::{DEFAULT_AZURE_API_VERSION, GatewayConfig};

/// Environment variable names read by [`load_from_env`].
pub const BEDROCK_REGION_VAR: &str = "BEDROCK_AWS_REGION";
pub const BEDROCK_TOKEN_VAR: &str = "AWS_BEARER_TOKEN_BEDROCK";
pub const AZURE_ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const AZURE_DEPLOYMENT_VAR: &str = "AZURE_OPENAI_DEPLOYMENT";

/// Load gateway configuration from the process environment.
pub fn load_from_env() -> GatewayConfig {
    load_with(|name| std::env::var(name).ok())
}

/// Load configuration through an arbitrary lookup function.
///
/// `load_from_env` delegates here; tests supply a deterministic lookup
/// instead of mutating the process environment.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> GatewayConfig {
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

    let config = GatewayConfig {
        bedrock_region: get(BEDROCK_REGION_VAR),
        bedrock_api_token: get(BEDROCK_TOKEN_VAR),
        azure_endpoint: get(AZURE_ENDPOINT_VAR),
        azure_api_key: get(AZURE_API_KEY_VAR),
        azure_api_version: get(AZURE_API_VERSION_VAR)
            .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
        azure_deployment: get(AZURE_DEPLOYMENT_VAR),
    };

    tracing::debug!(
        bedrock_region = config.bedrock_region.as_deref().unwrap_or("<unset>"),
        bedrock_token_present = config.bedrock_api_token.is_some(),
        azure_endpoint = config.azure_endpoint.as_deref().unwrap_or("<unset>"),
        azure_key_present = config.azure_api_key.is_some(),
        azure_api_version = %config.azure_api_version,
        "gateway configuration loaded"
    );

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_full_environment() {
        let config = load_with(lookup_from(&[
            (BEDROCK_REGION_VAR, "ap-northeast-1"),
            (BEDROCK_TOKEN_VAR, "bedrock-token"),
            (AZURE_ENDPOINT_VAR, "https://example.openai.azure.com"),
            (AZURE_API_KEY_VAR, "azure-key"),
            (AZURE_API_VERSION_VAR, "2025-01-01"),
            (AZURE_DEPLOYMENT_VAR, "chat-deploy"),
        ]));

        assert_eq!(config.bedrock_region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(config.bedrock_api_token.as_deref(), Some("bedrock-token"));
        assert_eq!(
            config.azure_endpoint.as_deref(),
            Some("https://example.openai.azure.com")
        );
        assert_eq!(config.azure_api_key.as_deref(), Some("azure-key"));
        assert_eq!(config.azure_api_version, "2025-01-01");
        assert_eq!(config.azure_deployment.as_deref(), Some("chat-deploy"));
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load_with(|_| None);
        assert!(config.bedrock_region.is_none());
        assert!(config.bedrock_api_token.is_none());
        assert!(config.azure_endpoint.is_none());
        assert!(config.azure_api_key.is_none());
        assert!(config.azure_deployment.is_none());
        assert_eq!(config.azure_api_version, DEFAULT_AZURE_API_VERSION);
    }

    #[test]
    fn test_empty_string_values_are_treated_as_unset() {
        let config = load_with(lookup_from(&[
            (BEDROCK_REGION_VAR, ""),
            (AZURE_API_VERSION_VAR, ""),
        ]));
        assert!(config.bedrock_region.is_none());
        assert_eq!(config.azure_api_version, DEFAULT_AZURE_API_VERSION);
    }
}
