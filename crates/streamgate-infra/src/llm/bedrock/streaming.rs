//! AWS event stream parser and Converse stream adapter.
//!
//! Bedrock streaming uses the AWS event stream binary protocol (not SSE).
//! Each frame has the layout:
//!
//! ```text
//! [total_len:4][headers_len:4][prelude_crc:4][headers...][payload...][msg_crc:4]
//! ```
//!
//! For the Converse API the payload of each frame is plain JSON; the frame
//! kind is carried in the `:event-type` header (`messageStart`,
//! `contentBlockDelta`, `contentBlockStop`, `messageStop`, `metadata`) or,
//! for failures, the `:exception-type` header (`throttlingException`,
//! `modelStreamErrorException`, ...).
//!
//! This module provides a minimal parser that extracts frames without
//! pulling in the full AWS SDK.

use futures_util::StreamExt;
use secrecy::ExposeSecret;

use streamgate_core::llm::provider::EventStream;
use streamgate_types::llm::{LlmError, StopReason, StreamEvent, Usage};

use super::types::{
    ContentBlockDeltaPayload, ConverseRequest, ExceptionPayload, MessageStopPayload,
    MetadataPayload,
};

/// One decoded frame from the binary event stream.
#[derive(Debug)]
struct Frame {
    /// Value of `:event-type`, when present.
    event_type: Option<String>,
    /// Value of `:exception-type`, when present.
    exception_type: Option<String>,
    payload: Vec<u8>,
}

/// Parse binary headers from an event stream frame.
///
/// Header format: `[name_len:1][name:N][type:1][value_len:2][value:M]`.
/// Only type 7 (string) is handled, which is all Bedrock emits; an
/// unknown type ends parsing since its length cannot be known.
fn parse_headers(mut buf: &[u8]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    while !buf.is_empty() {
        let name_len = buf[0] as usize;
        buf = &buf[1..];
        if buf.len() < name_len {
            break;
        }
        let name = String::from_utf8_lossy(&buf[..name_len]).to_string();
        buf = &buf[name_len..];

        if buf.is_empty() {
            break;
        }
        let header_type = buf[0];
        buf = &buf[1..];
        if header_type != 7 {
            break;
        }

        if buf.len() < 2 {
            break;
        }
        let value_len = u16::from_be_bytes([buf[0], buf[1]]) as usize;
        buf = &buf[2..];
        if buf.len() < value_len {
            break;
        }
        let value = String::from_utf8_lossy(&buf[..value_len]).to_string();
        buf = &buf[value_len..];
        headers.push((name, value));
    }
    headers
}

/// Parse one frame from the front of the buffer.
///
/// Returns `Some((frame, bytes_consumed))` on success, or `None` if the
/// buffer does not yet contain a complete frame.
fn parse_frame(buf: &[u8]) -> Option<(Frame, usize)> {
    if buf.len() < 12 {
        return None; // need at least the prelude
    }

    let total_len = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
    let headers_len = u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize;
    // bytes 8..12 = prelude CRC (skip)

    if buf.len() < total_len {
        return None; // incomplete frame
    }

    let headers_start = 12;
    let headers_end = headers_start + headers_len;
    let payload_end = total_len.checked_sub(4)?; // last 4 bytes = message CRC
    if headers_end > payload_end || payload_end > buf.len() {
        return None;
    }

    let headers = parse_headers(&buf[headers_start..headers_end]);
    let payload = buf[headers_end..payload_end].to_vec();

    let find = |wanted: &str| {
        headers
            .iter()
            .find(|(name, _)| name == wanted)
            .map(|(_, value)| value.clone())
    };

    Some((
        Frame {
            event_type: find(":event-type"),
            exception_type: find(":exception-type"),
            payload,
        },
        total_len,
    ))
}

/// Map a Converse `stopReason` string to a [`StopReason`].
fn map_stop_reason(reason: &str) -> StopReason {
    match reason {
        "end_turn" => StopReason::EndTurn,
        "max_tokens" => StopReason::MaxTokens,
        "stop_sequence" => StopReason::StopSequence,
        "content_filtered" | "guardrail_intervened" => StopReason::ContentFiltered,
        _ => StopReason::EndTurn,
    }
}

/// Turn an exception frame into the adapter error it represents.
fn map_exception(exception_type: &str, payload: &[u8]) -> LlmError {
    let message = serde_json::from_slice::<ExceptionPayload>(payload)
        .ok()
        .and_then(|p| p.message)
        .unwrap_or_else(|| exception_type.to_string());

    match exception_type {
        "throttlingException" => LlmError::RateLimited,
        "serviceUnavailableException" => LlmError::Overloaded(message),
        "validationException" => LlmError::InvalidRequest(message),
        _ => LlmError::Provider { message },
    }
}

/// Process one Converse event frame into zero or more [`StreamEvent`]s.
fn process_converse_event(
    event_type: &str,
    payload: &[u8],
) -> Result<Vec<StreamEvent>, LlmError> {
    let mut events = Vec::new();

    match event_type {
        "messageStart" | "contentBlockStart" | "contentBlockStop" => {
            // Structural markers with no text content.
        }

        "contentBlockDelta" => {
            let parsed: ContentBlockDeltaPayload = serde_json::from_slice(payload)
                .map_err(|e| LlmError::Deserialization(format!("contentBlockDelta: {e}")))?;
            if let Some(text) = parsed.delta.text {
                if !text.is_empty() {
                    events.push(StreamEvent::TextDelta { text });
                }
            }
        }

        "messageStop" => {
            let parsed: MessageStopPayload = serde_json::from_slice(payload)
                .map_err(|e| LlmError::Deserialization(format!("messageStop: {e}")))?;
            events.push(StreamEvent::MessageDelta {
                stop_reason: map_stop_reason(&parsed.stop_reason),
            });
        }

        "metadata" => {
            let parsed: MetadataPayload = serde_json::from_slice(payload)
                .map_err(|e| LlmError::Deserialization(format!("metadata: {e}")))?;
            if let Some(usage) = parsed.usage {
                events.push(StreamEvent::Usage(Usage {
                    input_tokens: usage.input_tokens,
                    output_tokens: usage.output_tokens,
                }));
            }
        }

        unknown => {
            tracing::warn!(event_type = unknown, "unknown Converse event type, skipping");
        }
    }

    Ok(events)
}

/// Map a non-success HTTP status on the initial response to an error.
fn map_http_error(status: reqwest::StatusCode, body: String) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited,
        503 => LlmError::Overloaded(body),
        s if s >= 500 => LlmError::Provider {
            message: format!("Bedrock server error HTTP {status}: {body}"),
        },
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    }
}

/// Open a streaming Converse connection and adapt it to [`StreamEvent`]s.
///
/// Sends the HTTP request, checks the response status, then decodes the
/// binary event stream body frame by frame. The returned stream owns its
/// HTTP client clone, so the provider may be dropped before first poll;
/// dropping the stream tears down the upstream connection.
pub fn create_converse_stream(
    client: &reqwest::Client,
    url: &str,
    body: ConverseRequest,
    bearer_token: &secrecy::SecretString,
) -> EventStream {
    let client = client.clone();
    let url = url.to_string();
    let token = bearer_token.expose_secret().to_string();

    Box::pin(async_stream::try_stream! {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let response = if status.is_success() {
            response
        } else {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "Bedrock converse-stream error response");
            Err(map_http_error(status, error_body))?;
            unreachable!()
        };

        yield StreamEvent::Connected;

        let mut byte_stream = response.bytes_stream();
        let mut buffer = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = chunk_result
                .map_err(|e| LlmError::Stream(format!("response body read: {e}")))?;
            buffer.extend_from_slice(&chunk);

            // Drain as many complete frames as the buffer holds.
            while let Some((frame, consumed)) = parse_frame(&buffer) {
                buffer.drain(..consumed);

                if let Some(exception_type) = frame.exception_type {
                    Err(map_exception(&exception_type, &frame.payload))?;
                }

                if let Some(event_type) = frame.event_type {
                    for event in process_converse_event(&event_type, &frame.payload)? {
                        yield event;
                    }
                }
            }
        }

        yield StreamEvent::Done;
    })
}
