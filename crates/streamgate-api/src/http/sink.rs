//! ChunkSink implementation over an HTTP response body channel.
//!
//! The handler opens a bounded mpsc channel and wraps the sender side in
//! [`BodyChunkSink`]; the receiver side becomes the chunked response body.
//! The channel's capacity is the gateway's only buffering layer: when the
//! client cannot drain fast enough, `write` suspends on `send`.

use std::io;

use bytes::Bytes;
use tokio::sync::mpsc;

use streamgate_core::relay::ChunkSink;
use streamgate_types::error::GatewayError;

/// Bounded channel capacity between the orchestrator and the body stream.
pub const CHANNEL_CAPACITY: usize = 32;

/// Streams chunks into an axum response body.
///
/// Terminals are fused through the inner `Option`: after `close` or
/// `abort`, the sender is gone, later terminal calls are no-ops, and
/// later writes fail with [`GatewayError::SinkWrite`]. Dropping the
/// receiver (client disconnect) makes the next `write` fail, which
/// propagates cancellation up to the provider stream.
pub struct BodyChunkSink {
    tx: Option<mpsc::Sender<Result<Bytes, io::Error>>>,
}

impl BodyChunkSink {
    pub fn new(tx: mpsc::Sender<Result<Bytes, io::Error>>) -> Self {
        Self { tx: Some(tx) }
    }
}

impl ChunkSink for BodyChunkSink {
    async fn write(&mut self, text: &str) -> Result<(), GatewayError> {
        let Some(tx) = self.tx.as_ref() else {
            return Err(GatewayError::SinkWrite(
                "output channel already terminated".to_string(),
            ));
        };
        tx.send(Ok(Bytes::copy_from_slice(text.as_bytes())))
            .await
            .map_err(|_| GatewayError::SinkWrite("response consumer went away".to_string()))
    }

    async fn close(&mut self) {
        // Dropping the sender ends the body stream cleanly: the final
        // zero-length chunk is the end-of-stream signal.
        self.tx.take();
    }

    async fn abort(&mut self, error: &GatewayError) {
        if let Some(tx) = self.tx.take() {
            // Best effort: an Err item makes hyper terminate the response
            // without a clean end-of-stream, so the caller can tell the
            // stream failed.
            let _ = tx.send(Err(io::Error::other(error.to_string()))).await;
        }
    }
}
