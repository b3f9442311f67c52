//! SessionStore trait definition.
//!
//! The gateway consumes conversation persistence only through this
//! contract; the storage mechanism behind it is an external collaborator.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use streamgate_types::chat::ChatTurn;
use streamgate_types::error::SessionStoreError;

/// Persistence contract for per-session conversation history.
///
/// Sessions are created implicitly on first `append_turn` for an unseen
/// id and are never explicitly destroyed by the gateway. The store places
/// no mutual exclusion around a session: concurrent invocations against
/// the same id are last-write-wins with no ordering guarantee between
/// them.
pub trait SessionStore: Send + Sync {
    /// Prior turns for a session, oldest first. Empty for an unseen id.
    fn history(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatTurn>, SessionStoreError>> + Send;

    /// Append one completed exchange to a session's history.
    fn append_turn(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
    ) -> impl std::future::Future<Output = Result<(), SessionStoreError>> + Send;
}
