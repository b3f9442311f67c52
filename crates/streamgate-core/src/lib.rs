//! Business logic and trait definitions for Streamgate.
//!
//! This crate defines the "ports" that the infrastructure layer implements
//! (provider adapters, session store, output sink) plus the two pieces of
//! pure gateway logic: the model registry and the chat orchestrator. It
//! depends only on `streamgate-types` -- never on `streamgate-infra` or
//! any HTTP/IO crate.

pub mod llm;
pub mod orchestrator;
pub mod registry;
pub mod relay;
pub mod session;
