//! Shared domain types for Streamgate.
//!
//! This crate contains the core domain types used across the gateway:
//! chat requests and turns, provider descriptors, streaming events, the
//! process configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
