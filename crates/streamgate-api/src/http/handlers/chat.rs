//! Streaming chat endpoint -- the gateway's request entry.
//!
//! POST /chat
//!
//! Reads the raw invocation payload, applies the all-or-nothing defaulting
//! policy, runs the orchestrator's resolving phase inline (so configuration
//! failures surface as HTTP errors before any byte is streamed), then hands
//! the live provider stream to a spawned relay task whose output becomes
//! the chunked response body.
//!
//! Defaulting policy: an entirely absent payload falls back to a fixed
//! question, a fixed model alias, and a freshly generated time-ordered
//! session id. A present-but-malformed payload is fatal (HTTP 400) -- it is
//! NOT defaulted field by field.

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use streamgate_core::relay::ChunkSink;
use streamgate_types::chat::{ChatRequest, new_session_id};

use crate::http::error::AppError;
use crate::http::sink::{BodyChunkSink, CHANNEL_CAPACITY};
use crate::state::AppState;

/// POST /chat -- relay one chat completion as an incremental text stream.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_request(&body)?;
    let session_id = request.session_id.clone().unwrap_or_else(new_session_id);

    tracing::debug!(
        session_id = %session_id,
        model = request.model.as_deref().unwrap_or("<default>"),
        "chat invocation"
    );

    // Resolving phase runs inline: a configuration failure becomes an HTTP
    // error while the response is still unsent.
    let prepared = state
        .orchestrator
        .start(&session_id, &request.question, request.model.as_deref())
        .await?;

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let mut sink = BodyChunkSink::new(tx);
    let orchestrator = state.orchestrator.clone();

    tokio::spawn(async move {
        match orchestrator.relay(prepared, &mut sink).await {
            // Success: the orchestrator has already closed the sink.
            Ok(()) => {}
            Err(error) => {
                tracing::error!(error = %error, "chat invocation failed mid-stream");
                sink.abort(&error).await;
            }
        }
        // The entry owns the close guarantee on every return path; the
        // terminal is fused, so this is a no-op when already signalled.
        sink.close().await;
    });

    let stream = ReceiverStream::new(rx);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(stream),
    ))
}

/// Apply the payload parsing and defaulting policy.
///
/// Defaulting is all-or-nothing at the payload level: only a fully absent
/// body gets the fallback request; malformed JSON is an error.
fn parse_request(body: &Bytes) -> Result<ChatRequest, AppError> {
    if body.is_empty() {
        return Ok(ChatRequest::fallback());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("malformed request payload: {e}")))
}
