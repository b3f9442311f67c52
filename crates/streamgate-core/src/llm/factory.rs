//! AdapterFactory trait definition.
//!
//! Separates descriptor resolution (pure, in [`crate::registry`]) from
//! adapter construction (which consults process configuration). The
//! orchestrator opens one fresh adapter per invocation through this trait.

use streamgate_types::error::GatewayError;
use streamgate_types::llm::ProviderDescriptor;

use super::provider::BoxLlmProvider;

/// Constructs a provider adapter for a resolved descriptor.
///
/// Implementations live in streamgate-infra. Construction fails with
/// [`GatewayError::Configuration`] when a required construction parameter
/// (e.g. the Bedrock region) is absent from process configuration.
pub trait AdapterFactory: Send + Sync {
    fn open(&self, descriptor: &ProviderDescriptor) -> Result<BoxLlmProvider, GatewayError>;
}
