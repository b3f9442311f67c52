//! HTTP layer: router, handlers, error mapping, and the streaming body sink.

pub mod error;
pub mod handlers;
pub mod router;
pub mod sink;
