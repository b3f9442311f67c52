//! Application state wiring the orchestrator to its concrete collaborators.

use std::sync::Arc;

use streamgate_core::orchestrator::ChatOrchestrator;
use streamgate_infra::config;
use streamgate_infra::llm::ConfiguredAdapterFactory;
use streamgate_infra::session::MemorySessionStore;
use streamgate_types::config::GatewayConfig;

/// The orchestrator generics pinned to the infra implementations.
pub type ConcreteOrchestrator = ChatOrchestrator<MemorySessionStore, ConfiguredAdapterFactory>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConcreteOrchestrator>,
}

impl AppState {
    /// Wire the orchestrator from an explicit configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let orchestrator = ChatOrchestrator::new(
            MemorySessionStore::new(),
            ConfiguredAdapterFactory::new(config),
        );
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Wire the orchestrator from the process environment.
    pub fn from_env() -> Self {
        Self::new(config::load_from_env())
    }
}
