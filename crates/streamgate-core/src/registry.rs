//! Model registry: alias-to-descriptor resolution.
//!
//! A single static table maps client-supplied model aliases to provider
//! descriptors. Resolution is a first-match scan so the mapping is
//! enumerable and order-independent (each alias appears at most once).
//! Unknown, empty, or absent aliases silently fall back to the default
//! hosted-chat model -- never an error.

use streamgate_types::llm::{Platform, ProviderDescriptor};

/// One row of the alias table.
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub alias: &'static str,
    pub platform: Platform,
    pub model_id: &'static str,
}

/// The full alias table. Public so tests can assert the mapping without
/// network calls.
pub const MODEL_TABLE: &[ModelEntry] = &[
    ModelEntry {
        alias: "cohere",
        platform: Platform::Bedrock,
        model_id: "cohere.command-r-v1:0",
    },
    ModelEntry {
        alias: "llama32-1b",
        platform: Platform::Bedrock,
        model_id: "us.meta.llama3-2-1b-instruct-v1:0",
    },
    ModelEntry {
        alias: "llama32-3b",
        platform: Platform::Bedrock,
        model_id: "us.meta.llama3-2-3b-instruct-v1:0",
    },
    ModelEntry {
        alias: "llama33-70b",
        platform: Platform::Bedrock,
        model_id: "us.meta.llama3-3-70b-instruct-v1:0",
    },
    ModelEntry {
        alias: "nova-lite",
        platform: Platform::Bedrock,
        model_id: "us.amazon.nova-lite-v1:0",
    },
    ModelEntry {
        alias: "nova-micro",
        platform: Platform::Bedrock,
        model_id: "us.amazon.nova-micro-v1:0",
    },
    ModelEntry {
        alias: "nova-pro",
        platform: Platform::Bedrock,
        model_id: "us.amazon.nova-pro-v1:0",
    },
    ModelEntry {
        alias: "gpt-4o-mini",
        platform: Platform::AzureOpenAi,
        model_id: "gpt-4o-mini",
    },
    ModelEntry {
        alias: "o1-mini",
        platform: Platform::AzureOpenAi,
        model_id: "o1-mini",
    },
];

/// Model used when the alias is absent, empty, or unrecognized.
pub const DEFAULT_MODEL_ID: &str = "gpt-4o";

/// Resolve an alias to a provider descriptor.
///
/// Exactly one descriptor is produced per call. Resolution is pure: adapter
/// construction is a separate step through
/// [`crate::llm::factory::AdapterFactory`].
pub fn resolve(alias: Option<&str>) -> ProviderDescriptor {
    if let Some(alias) = alias {
        for entry in MODEL_TABLE {
            if entry.alias == alias {
                tracing::debug!(
                    alias,
                    platform = %entry.platform,
                    model = entry.model_id,
                    "model alias resolved"
                );
                return ProviderDescriptor::new(entry.platform, entry.model_id);
            }
        }
    }

    tracing::debug!(
        alias = alias.unwrap_or(""),
        model = DEFAULT_MODEL_ID,
        "alias absent or unrecognized, using default model"
    );
    ProviderDescriptor::new(Platform::AzureOpenAi, DEFAULT_MODEL_ID)
}
