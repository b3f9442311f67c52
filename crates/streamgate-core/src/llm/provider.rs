//! LlmProvider trait definition.
//!
//! This is the capability every provider adapter implements. The streaming
//! call returns a `Pin<Box<dyn Stream>>` so the trait stays object-safe and
//! adapters can be selected at runtime behind `Box<dyn LlmProvider>`.

use std::pin::Pin;

use futures_util::Stream;

use streamgate_types::llm::{CompletionRequest, LlmError, Platform, StreamEvent};

/// A finite stream of provider events. Not restartable: once consumed or
/// dropped, a new request must be issued through a fresh adapter call.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + 'static>>;

/// Trait for streaming chat-completion adapters (Bedrock, Azure OpenAI).
///
/// Implementations live in streamgate-infra. An adapter instance is owned
/// by exactly one invocation; adapters are not pooled or reused.
pub trait LlmProvider: Send + Sync {
    /// Human-readable adapter name (e.g., "bedrock", "azure_openai").
    fn name(&self) -> &str;

    /// Backend platform family this adapter talks to.
    fn platform(&self) -> Platform;

    /// Wire-level model identifier this adapter was constructed for.
    fn model(&self) -> &str;

    /// Send a streaming completion request.
    ///
    /// The returned stream yields chunks as the underlying service produces
    /// them, in production order, with no buffering beyond transport-frame
    /// decoding. The stream must own everything it needs: the adapter may
    /// be dropped before the stream is first polled.
    fn stream(&self, request: CompletionRequest) -> EventStream;
}

/// Type-erased provider for runtime platform selection.
pub type BoxLlmProvider = Box<dyn LlmProvider>;
