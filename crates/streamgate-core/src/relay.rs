//! ChunkSink trait definition.
//!
//! The output side of the streaming relay: the orchestrator forwards each
//! generated chunk to a sink as it is produced, and the sink's `write` is
//! the only backpressure point in the gateway -- when the consumer cannot
//! accept more data, `write` suspends until capacity is available.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use streamgate_types::error::GatewayError;

/// Incremental output channel for one invocation.
///
/// A sink receives a strictly ordered, non-overlapping sequence of chunks
/// terminated by exactly one terminal signal: `close` on success or
/// `abort` on failure. Both terminals are fused -- after the first, later
/// terminal calls are no-ops and later `write` calls fail with
/// [`GatewayError::SinkWrite`].
pub trait ChunkSink: Send {
    /// Write one chunk of generated text.
    ///
    /// Fails with [`GatewayError::SinkWrite`] if the consumer has gone
    /// away (e.g. client disconnect) or the sink is already terminated.
    fn write(
        &mut self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;

    /// Signal successful end-of-stream.
    fn close(&mut self) -> impl std::future::Future<Output = ()> + Send;

    /// Terminate the stream after a failure, without a completion marker.
    fn abort(
        &mut self,
        error: &GatewayError,
    ) -> impl std::future::Future<Output = ()> + Send;
}
