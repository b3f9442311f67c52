//! Chat orchestrator: drives one invocation's full lifecycle.
//!
//! The lifecycle is `Idle -> Resolving -> Streaming -> {Completed | Failed}`,
//! split across two calls so failures in the resolving phase can be
//! surfaced to the caller before any streaming begins:
//!
//! - [`ChatOrchestrator::start`] covers `Idle -> Resolving`: load prior
//!   context, resolve the alias, open a fresh adapter, issue the request.
//! - [`ChatOrchestrator::relay`] covers `Streaming -> {Completed | Failed}`:
//!   forward chunks to the sink in production order, then persist the
//!   completed turn and close the sink, or stop on the first error.
//!
//! No retries: a provider failure is terminal for the invocation. Adapters
//! are opened fresh per invocation and never pooled.

use futures_util::StreamExt;
use tracing::debug;

use streamgate_types::chat::ChatTurn;
use streamgate_types::error::GatewayError;
use streamgate_types::llm::{
    CompletionRequest, Message, MessageRole, ProviderDescriptor, StreamEvent,
};

use crate::llm::factory::AdapterFactory;
use crate::llm::provider::EventStream;
use crate::registry;
use crate::relay::ChunkSink;
use crate::session::SessionStore;

/// Orchestrates context retrieval, provider invocation, chunk relay, and
/// history persistence for chat invocations.
///
/// Generic over the session store and adapter factory so the core never
/// depends on streamgate-infra.
pub struct ChatOrchestrator<S, F> {
    store: S,
    factory: F,
}

/// An invocation that has passed the resolving phase and holds a live
/// (but not yet polled) provider stream.
pub struct PreparedStream {
    session_id: String,
    question: String,
    descriptor: ProviderDescriptor,
    events: EventStream,
}

impl PreparedStream {
    /// The descriptor the invocation resolved to.
    pub fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }
}

impl<S: SessionStore, F: AdapterFactory> ChatOrchestrator<S, F> {
    pub fn new(store: S, factory: F) -> Self {
        Self { store, factory }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// `Idle -> Resolving`: load prior turns, resolve the alias, open a
    /// fresh adapter, and issue the streaming request.
    ///
    /// Exactly one descriptor is resolved and one adapter opened per
    /// invocation. No upstream I/O happens until the returned stream is
    /// polled in [`relay`](Self::relay), so a [`GatewayError::Configuration`]
    /// from adapter construction reaches the caller before any chunk is
    /// produced.
    pub async fn start(
        &self,
        session_id: &str,
        question: &str,
        model_alias: Option<&str>,
    ) -> Result<PreparedStream, GatewayError> {
        let history = self.store.history(session_id).await?;
        debug!(session_id, turns = history.len(), "session context loaded");

        let descriptor = registry::resolve(model_alias);
        let provider = self.factory.open(&descriptor)?;
        let request = build_completion_request(&descriptor, &history, question);
        let events = provider.stream(request);

        Ok(PreparedStream {
            session_id: session_id.to_string(),
            question: question.to_string(),
            descriptor,
            events,
        })
    }

    /// `Streaming -> {Completed | Failed}`: drain the provider stream into
    /// the sink.
    ///
    /// Each text delta is written to the sink as it arrives -- no
    /// reordering, no batching; the sink's own backpressure is the only
    /// throttle. On exhaustion the assembled answer is appended to the
    /// session history and the sink is closed. On any error no history is
    /// persisted and the error propagates to the caller, which still owns
    /// the terminal signal for the failure path.
    pub async fn relay<K: ChunkSink>(
        &self,
        prepared: PreparedStream,
        sink: &mut K,
    ) -> Result<(), GatewayError> {
        let PreparedStream {
            session_id,
            question,
            descriptor,
            mut events,
        } = prepared;

        let mut answer = String::new();

        while let Some(event) = events.next().await {
            match event {
                Ok(StreamEvent::TextDelta { text }) => {
                    sink.write(&text).await?;
                    answer.push_str(&text);
                }
                Ok(StreamEvent::Connected) => {
                    debug!(platform = %descriptor.platform, model = %descriptor.model_id, "provider connected");
                }
                Ok(StreamEvent::Usage(usage)) => {
                    debug!(
                        input_tokens = usage.input_tokens,
                        output_tokens = usage.output_tokens,
                        "provider reported usage"
                    );
                }
                Ok(StreamEvent::MessageDelta { stop_reason }) => {
                    debug!(stop_reason = %stop_reason, "provider finished generating");
                }
                Ok(StreamEvent::Done) => break,
                Err(source) => {
                    return Err(GatewayError::Provider {
                        platform: descriptor.platform,
                        model: descriptor.model_id,
                        source,
                    });
                }
            }
        }

        self.store
            .append_turn(&session_id, &question, &answer)
            .await?;
        debug!(session_id = %session_id, answer_len = answer.len(), "turn persisted");

        sink.close().await;
        Ok(())
    }
}

/// Assemble the provider request: prior turns as alternating user and
/// assistant messages, then the new question, with the descriptor's fixed
/// generation settings.
fn build_completion_request(
    descriptor: &ProviderDescriptor,
    history: &[ChatTurn],
    question: &str,
) -> CompletionRequest {
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for turn in history {
        messages.push(Message {
            role: MessageRole::User,
            content: turn.question.clone(),
        });
        messages.push(Message {
            role: MessageRole::Assistant,
            content: turn.answer.clone(),
        });
    }
    messages.push(Message {
        role: MessageRole::User,
        content: question.to_string(),
    });

    CompletionRequest {
        model: descriptor.model_id.clone(),
        messages,
        temperature: Some(descriptor.temperature),
        max_tokens: None,
        stream: descriptor.streaming,
    }
}
