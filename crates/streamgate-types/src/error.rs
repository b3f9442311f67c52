//! Gateway error types.

use thiserror::Error;

use crate::llm::{LlmError, Platform};

/// Errors from session-store operations (used by trait definitions in
/// streamgate-core).
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Top-level error for one gateway invocation.
///
/// A `Configuration` error is raised at adapter construction, before any
/// streaming begins. A `Provider` error is a request-time failure tagged
/// with the upstream platform and model for diagnostics; it terminates
/// the chunk sequence without a completion marker.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider error on {platform}/{model}: {source}")]
    Provider {
        platform: Platform,
        model: String,
        #[source]
        source: LlmError,
    },

    #[error("output sink rejected write: {0}")]
    SinkWrite(String),

    #[error("session store error: {0}")]
    Session(#[from] SessionStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = GatewayError::Configuration("BEDROCK_AWS_REGION is not set".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: BEDROCK_AWS_REGION is not set"
        );
    }

    #[test]
    fn test_provider_error_carries_platform_and_model() {
        let err = GatewayError::Provider {
            platform: Platform::Bedrock,
            model: "us.amazon.nova-micro-v1:0".to_string(),
            source: LlmError::RateLimited,
        };
        let text = err.to_string();
        assert!(text.contains("bedrock"));
        assert!(text.contains("us.amazon.nova-micro-v1:0"));
    }

    #[test]
    fn test_session_error_converts() {
        let err: GatewayError = SessionStoreError::Storage("disk full".to_string()).into();
        assert!(matches!(err, GatewayError::Session(_)));
    }
}
