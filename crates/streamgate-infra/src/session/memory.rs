//! In-memory session store.
//!
//! Backs the `SessionStore` contract with a `DashMap`. Stands in for the
//! external persistence collaborator: sessions appear on first append and
//! live for the process lifetime. Appends to one session are serialized
//! by the map's per-entry lock; across concurrent invocations of the same
//! session the outcome is last-write-wins, with no ordering guarantee.

use chrono::Utc;
use dashmap::DashMap;

use streamgate_core::session::SessionStore;
use streamgate_types::chat::ChatTurn;
use streamgate_types::error::SessionStoreError;

/// Process-local, concurrent session history store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Vec<ChatTurn>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl SessionStore for MemorySessionStore {
    async fn history(&self, session_id: &str) -> Result<Vec<ChatTurn>, SessionStoreError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|turns| turns.clone())
            .unwrap_or_default())
    }

    async fn append_turn(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), SessionStoreError> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(ChatTurn {
                question: question.to_string(),
                answer: answer.to_string(),
                created_at: Utc::now(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unseen_session_has_empty_history() {
        let store = MemorySessionStore::new();
        let history = store.history("never-seen").await.unwrap();
        assert!(history.is_empty());
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_append_creates_session_implicitly() {
        let store = MemorySessionStore::new();
        store.append_turn("abc", "q1", "a1").await.unwrap();

        assert_eq!(store.session_count(), 1);
        let history = store.history("abc").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].question, "q1");
        assert_eq!(history[0].answer, "a1");
    }

    #[tokio::test]
    async fn test_turns_are_ordered() {
        let store = MemorySessionStore::new();
        store.append_turn("abc", "q1", "a1").await.unwrap();
        store.append_turn("abc", "q2", "a2").await.unwrap();
        store.append_turn("abc", "q3", "a3").await.unwrap();

        let history = store.history("abc").await.unwrap();
        let questions: Vec<&str> = history.iter().map(|t| t.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = MemorySessionStore::new();
        store.append_turn("abc", "q", "a").await.unwrap();
        store.append_turn("xyz", "other", "answer").await.unwrap();

        assert_eq!(store.history("abc").await.unwrap().len(), 1);
        assert_eq!(store.history("xyz").await.unwrap().len(), 1);
        assert_eq!(store.history("abc").await.unwrap()[0].question, "q");
    }

    #[tokio::test]
    async fn test_concurrent_appends_to_distinct_sessions() {
        let store = Arc::new(MemorySessionStore::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let session_id = format!("session-{i}");
                store.append_turn(&session_id, "q", "a").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.session_count(), 8);
    }
}
