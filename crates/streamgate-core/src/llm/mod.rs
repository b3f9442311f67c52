//! LLM provider abstractions.
//!
//! - [`provider::LlmProvider`]: trait for concrete streaming adapters
//! - [`factory::AdapterFactory`]: constructs an adapter from a descriptor

pub mod factory;
pub mod provider;
